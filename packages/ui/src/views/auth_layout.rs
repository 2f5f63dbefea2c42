use dioxus::prelude::*;

/// Centres its children in a full-height single column.
#[component]
pub fn AuthLayoutView(children: Element) -> Element {
    rsx! {
        section {
            class: "auth-layout",
            {children}
        }
    }
}
