use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// Plain action button. Without `onclick` it renders but does nothing.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("button {}", extra),
        _ => "button".to_string(),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
