use dioxus::prelude::*;

use crate::auth_form::FormMode;
use crate::components::ButtonVariant;
use crate::config::use_app_config;

/// Landing content for the root route.
#[component]
pub fn HomeView() -> Element {
    let config = use_app_config();
    let sign_in_class = ButtonVariant::Primary.class();
    let sign_up_class = ButtonVariant::Outline.class();

    rsx! {
        div {
            class: "home",
            h1 { class: "home-title", "{config.site.title}" }
            p { class: "home-tagline", "{config.site.description}" }
            div {
                class: "home-actions",
                Link {
                    class: "{sign_in_class}",
                    to: FormMode::SignIn.destination().path(),
                    "{FormMode::SignIn.submit_label()}"
                }
                Link {
                    class: "{sign_up_class}",
                    to: FormMode::SignUp.destination().path(),
                    "{FormMode::SignUp.submit_label()}"
                }
            }
        }
    }
}
