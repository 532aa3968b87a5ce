//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{ConversationView, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/messages/:username")]
    ConversationView { username: String },
}
