//! Routed page that loads and shows the conversation with one user.

use dioxus::prelude::*;

use crate::components::messages::Messages;
use crate::components::ui::{Avatar, AvatarSize};
use crate::config::AppConfig;
use crate::messages::fetch_messages;
use crate::routes::Route;
use crate::{log_error, log_info};

#[component]
pub fn ConversationView(username: String) -> Element {
    let config = use_context::<AppConfig>();

    // Re-runs whenever the route parameter changes
    let conversation = use_resource(use_reactive(&username, move |username: String| {
        let client = config.api_client();
        async move {
            match fetch_messages(&client, &username).await {
                Ok(messages) => {
                    log_info!("loaded {} messages for {}", messages.len(), username);
                    Ok(messages)
                }
                Err(e) => {
                    log_error!("failed to load messages for {username}: {e}");
                    Err(e.to_string())
                }
            }
        }
    }));

    let body = match conversation.read().as_ref() {
        Some(Ok(messages)) => rsx! {
            Messages { messages: messages.clone(), username: username.clone() }
        },
        Some(Err(err)) => rsx! {
            p { class: "error", "Could not load messages: {err}" }
        },
        None => rsx! {
            p { class: "loading", "Loading messages..." }
        },
    };

    rsx! {
        div { class: "conversation",
            header { class: "conversation-header",
                Link { class: "back-link", to: Route::Home {}, "Back" }
                Avatar { username: username.clone(), size: AvatarSize::Large }
                h2 { "{username}" }
            }
            {body}
        }
    }
}
