//! Data models for conversation threads.

use serde::{Deserialize, Serialize};

/// Identifier that marks the local viewer in `from`/`to` fields.
///
/// Message direction is decided against this literal, not against the
/// username of the conversation being viewed.
pub const VIEWER: &str = "you";

/// A single chat entry as served by the mock message resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub from: String,
    pub to: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Ordered sequence of messages involving one counterpart.
pub type Conversation = Vec<Message>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    Sent,
    Received,
}

impl MessageDirection {
    /// CSS class used by the message wrapper.
    pub fn class(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Received => "received",
        }
    }
}

impl Message {
    pub fn new(from: impl Into<String>, to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            message: message.into(),
            video_url: None,
        }
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Video link to embed; an empty `videoUrl` counts as no video.
    pub fn video(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn direction(&self) -> MessageDirection {
        if self.from == VIEWER {
            MessageDirection::Sent
        } else {
            MessageDirection::Received
        }
    }

    pub fn is_to_viewer(&self) -> bool {
        self.to == VIEWER
    }

    /// True when `username` is either the sender or the recipient.
    pub fn involves(&self, username: &str) -> bool {
        self.from == username || self.to == username
    }
}
