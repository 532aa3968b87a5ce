//! View components for the application.

pub mod conversation_view;
pub mod home;

pub use conversation_view::ConversationView;
pub use home::Home;
