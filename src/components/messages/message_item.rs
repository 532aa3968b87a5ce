//! Single message bubble.

use dioxus::prelude::*;

use crate::components::ui::{Avatar, AvatarSize, Icon, VideoPlayer};
use crate::models::{Message, MessageDirection};

/// One entry of the thread.
///
/// ```text
/// received:  [A] | body            |
/// sent:          | body            | (✓)
/// ```
///
/// The avatar belongs to `username` and only appears on messages addressed to
/// the viewer; the read marker only appears on messages the viewer sent.
#[component]
pub fn MessageItem(message: Message, username: String) -> Element {
    let direction = message.direction();
    let class = direction.class();

    rsx! {
        div { class: "message-wrapper {class}",
            if message.is_to_viewer() {
                Avatar { username: username.clone(), size: AvatarSize::Medium }
            }
            div { class: "message",
                "{message.message}"
                if let Some(url) = message.video() {
                    br {}
                    VideoPlayer { url: url.to_string() }
                }
            }
            if direction == MessageDirection::Sent {
                div { class: "message-read",
                    Icon { name: "check-circle" }
                }
            }
        }
    }
}
