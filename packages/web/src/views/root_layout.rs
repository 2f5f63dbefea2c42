use dioxus::prelude::*;
use ui::views::RootLayoutView;

use crate::Route;

/// Layout for the signed-in section, with the persistent header.
#[component]
pub fn RootLayout() -> Element {
    rsx! {
        RootLayoutView {
            Outlet::<Route> {}
        }
    }
}
