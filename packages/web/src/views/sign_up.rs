//! Sign-up page view.

use dioxus::prelude::*;
use ui::{AuthForm, Destination, FormMode};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();

    rsx! {
        AuthForm {
            mode: FormMode::SignUp,
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
    }
}
