use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)]
    invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let id = (!id.is_empty()).then_some(id);

    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            "aria-invalid": if invalid { "true" } else { "false" },
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
