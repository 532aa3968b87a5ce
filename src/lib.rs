//! Messenger - Dioxus conversation viewer
//!
//! Fetches the mock message resource, keeps the conversation with one user
//! and renders it as a thread. Runs on the web and desktop renderers.

pub mod api_client;
pub mod config;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;

pub mod components;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use config::AppConfig;
pub use error::ApiError;
pub use messages::{fetch_messages, filter_conversation, MESSAGES_PATH};
pub use models::{Conversation, Message, MessageDirection, VIEWER};
pub use routes::Route;
