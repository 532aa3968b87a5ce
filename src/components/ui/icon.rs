use dioxus::prelude::*;

/// Named glyph from the icon font, e.g. `check-circle`.
#[component]
pub fn Icon(name: String) -> Element {
    rsx! {
        i { class: "icon icon-{name}", aria_hidden: "true" }
    }
}
