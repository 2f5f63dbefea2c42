//! The sign-in / sign-up form.

use dioxus::prelude::*;

use super::field::FormField;
use super::mode::{Destination, FormMode};
use super::schema::{CredentialInput, FieldErrors};
use super::submit::{submit_credentials, Notification, Severity, Verifier};
use crate::components::{use_toast, Button, ButtonVariant, ToastOptions};
use crate::config::use_app_config;

const AUTH_FORM_CSS: Asset = asset!("/assets/styling/auth_form.css");

/// Authentication form for one [`FormMode`].
///
/// Toasts go to the host mounted by [`crate::AppShell`]. Navigation is left to
/// the caller through `on_navigate`, since the route enum lives in the
/// application crate. The credential verifier is read from context and
/// defaults to the simulated one.
#[component]
pub fn AuthForm(mode: FormMode, on_navigate: EventHandler<Destination>) -> Element {
    let config = use_app_config();
    let toast_api = use_toast();
    let verifier = try_use_context::<Verifier>().unwrap_or_default();
    let mut input = use_signal(CredentialInput::default);
    let mut errors = use_signal(FieldErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let notify = |notification: Notification| match notification.severity {
            Severity::Success => {
                toast_api.success(notification.message, ToastOptions::new());
            }
            Severity::Error => {
                toast_api.error(notification.message, ToastOptions::new());
            }
        };
        let navigate = |to: Destination| on_navigate.call(to);

        let values = input();
        let outcome = submit_credentials(mode, &values, &verifier, &notify, &navigate);
        errors.write().apply(outcome);
    };

    rsx! {
        document::Stylesheet { href: AUTH_FORM_CSS }

        div {
            class: "auth-card",

            h1 { class: "auth-card-title", "{mode.heading()}" }
            p { class: "auth-card-tagline", "{config.site.description}" }

            form {
                class: "auth-form",
                novalidate: true,
                onsubmit: handle_submit,

                for field in mode.fields().iter().copied() {
                    FormField {
                        key: "{field.id()}",
                        field: field,
                        value: input.read().get(field).to_string(),
                        error: errors.read().get(field).map(str::to_string),
                        oninput: move |value: String| {
                            input.write().set(field, value);
                            errors.write().clear(field);
                        },
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "auth-submit",
                    r#type: "submit",
                    "{mode.submit_label()}"
                }
            }

            p {
                class: "auth-switch",
                "{mode.switch_prompt()}"
                Link {
                    class: "auth-switch-link",
                    to: mode.switch_destination().path(),
                    "{mode.switch_label()}"
                }
            }
        }
    }
}
