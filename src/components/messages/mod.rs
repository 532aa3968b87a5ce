//! Conversation thread components.
//!
//! - `Messages`: the thread with its composer row
//! - `MessageItem`: one message bubble

pub mod message_item;
pub mod thread;

pub use message_item::MessageItem;
pub use thread::{Messages, EMPTY_PLACEHOLDER};
