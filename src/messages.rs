//! Message fetcher backed by the static mock resource.

use crate::api_client::ApiClient;
use crate::error::ApiError;
use crate::models::{Conversation, Message};
use crate::log_debug;

/// Path of the JSON fixture holding every message.
pub const MESSAGES_PATH: &str = "/mocks/messages.json";

/// Keep the messages sent by or addressed to `username`, in source order.
pub fn filter_conversation(messages: Vec<Message>, username: &str) -> Conversation {
    messages
        .into_iter()
        .filter(|message| message.involves(username))
        .collect()
}

/// Fetch the fixture and return the conversation involving `username`.
///
/// No retry, caching or timeout: a network failure or an unparseable body is
/// returned to the caller as is.
pub async fn fetch_messages(client: &ApiClient, username: &str) -> Result<Conversation, ApiError> {
    log_debug!("fetching messages for {username}");
    let messages: Vec<Message> = client.get_json(MESSAGES_PATH).await?;
    let total = messages.len();
    let conversation = filter_conversation(messages, username);
    log_debug!("kept {} of {} messages for {}", conversation.len(), total, username);
    Ok(conversation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Message> {
        vec![
            Message::new("you", "alice", "hi"),
            Message::new("bob", "you", "sup"),
            Message::new("alice", "you", "hello back"),
            Message::new("carol", "bob", "unrelated"),
        ]
    }

    #[test]
    fn keeps_sender_and_recipient_matches_in_order() {
        let conversation = filter_conversation(sample(), "alice");
        assert_eq!(
            conversation,
            vec![
                Message::new("you", "alice", "hi"),
                Message::new("alice", "you", "hello back"),
            ]
        );
    }

    #[test]
    fn unknown_user_gets_empty_conversation() {
        assert!(filter_conversation(sample(), "dave").is_empty());
        assert!(filter_conversation(Vec::new(), "alice").is_empty());
    }

    fn user() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("you".to_string()),
            Just("alice".to_string()),
            Just("bob".to_string()),
            "[a-z]{1,6}",
        ]
    }

    fn message() -> impl Strategy<Value = Message> {
        (user(), user(), "[a-z ]{0,20}").prop_map(|(from, to, body)| Message::new(from, to, body))
    }

    proptest! {
        /// Every kept message involves the user and nothing involving the user is dropped
        #[test]
        fn filter_is_exact_and_order_preserving(
            messages in prop::collection::vec(message(), 0..40),
            username in user(),
        ) {
            let expected: Vec<Message> = messages
                .iter()
                .filter(|m| m.from == username || m.to == username)
                .cloned()
                .collect();
            let conversation = filter_conversation(messages, &username);
            prop_assert!(conversation.iter().all(|m| m.from == username || m.to == username));
            prop_assert_eq!(conversation, expected);
        }
    }
}
