use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub value: Option<String>,
    #[props(optional)]
    pub oninput: Option<EventHandler<FormEvent>>,
    #[props(optional)]
    pub placeholder: Option<String>,
}

/// Single-line text field. Uncontrolled when no `value` is given.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("text-input {}", extra),
        _ => "text-input".to_string(),
    };

    rsx! {
        input {
            class,
            r#type: "text",
            value: props.value,
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| {
                if let Some(handler) = &props.oninput {
                    handler.call(e);
                }
            },
        }
    }
}
