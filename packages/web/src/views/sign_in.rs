//! Sign-in page view.

use dioxus::prelude::*;
use ui::{AuthForm, Destination, FormMode};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        AuthForm {
            mode: FormMode::SignIn,
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
    }
}
