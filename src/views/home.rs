//! Landing page: pick a user to open the conversation with.

use dioxus::prelude::*;

use crate::components::ui::{Button, TextInput};
use crate::log_warn;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let mut username = use_signal(String::new);

    let open = move |_: MouseEvent| {
        let name = username.read().trim().to_string();
        if name.is_empty() {
            log_warn!("no username entered");
            return;
        }
        nav.push(Route::ConversationView { username: name });
    };

    rsx! {
        div { class: "home",
            h1 { "Messenger" }
            p { "Enter a username to open your conversation with them." }
            div { class: "home-form",
                TextInput {
                    value: username.cloned(),
                    placeholder: "username",
                    oninput: move |e: FormEvent| username.set(e.value()),
                }
                Button { onclick: open, "Open" }
            }
        }
    }
}
