//! Conversation thread with a composer row.

use dioxus::prelude::*;

use super::MessageItem;
use crate::components::ui::{Button, TextInput};
use crate::models::Message;

pub const EMPTY_PLACEHOLDER: &str = "You have no messages";

/// Renders `messages` in order for the conversation with `username`.
///
/// The composer input and Send button are static: nothing is wired to them.
#[component]
pub fn Messages(#[props(default)] messages: Vec<Message>, username: String) -> Element {
    rsx! {
        div { class: "messages",
            div { class: "list",
                if messages.is_empty() {
                    p { "{EMPTY_PLACEHOLDER}" }
                } else {
                    for (i, message) in messages.iter().enumerate() {
                        MessageItem {
                            key: "{i}",
                            message: message.clone(),
                            username: username.clone(),
                        }
                    }
                }
            }
            div { class: "new-message",
                TextInput { class: "message-box", placeholder: "Type your message..." }
                Button { "Send" }
            }
        }
    }
}
