use dioxus::prelude::*;
use ui::views::AuthLayoutView;

use crate::Route;

/// Layout for the sign-in and sign-up routes.
#[component]
pub fn AuthLayout() -> Element {
    rsx! {
        AuthLayoutView {
            Outlet::<Route> {}
        }
    }
}
