use dioxus::prelude::*;

use super::mode::Field;
use crate::components::{Input, Label};
use crate::icons::FaCircleExclamation;
use crate::Icon;

/// Labelled input with an inline error message underneath.
#[component]
pub fn FormField(
    field: Field,
    value: String,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();
    let input_class = if invalid { "form-field-input invalid" } else { "form-field-input" };

    rsx! {
        div {
            class: "form-field",
            Label { html_for: "{field.id()}", "{field.label()}" }
            Input {
                id: "{field.id()}",
                class: "{input_class}",
                r#type: "{field.input_type()}",
                placeholder: "{field.placeholder()}",
                value: value,
                invalid: invalid,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p {
                    class: "form-field-error",
                    role: "alert",
                    Icon { icon: FaCircleExclamation, width: 12, height: 12 }
                    span { "{message}" }
                }
            }
        }
    }
}
