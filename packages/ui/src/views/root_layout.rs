use dioxus::prelude::*;

use crate::Header;

/// Header above the page content.
#[component]
pub fn RootLayoutView(children: Element) -> Element {
    rsx! {
        Header {}
        main {
            class: "root-layout-main",
            {children}
        }
    }
}
