//! # Messages and Conversations
//!
//! File: cli/src/agent/message.rs
//!
//! Role-tagged chat messages and the append-only conversation that holds them.
//! Roles serialize in lowercase (`"user"`, `"assistant"`, `"system"`) to match
//! the JSON wire format.
//!
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Locally generated notices, e.g. a failed request.
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        };
        f.write_str(label)
    }
}

/// A single chat message. Fields are private so a message cannot change after
/// it has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// # Conversation (`Conversation`)
///
/// Ordered, append-only list of messages in chronological order. The only
/// mutation offered is `push`; there is no way to edit or remove a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_str::<Message>(r#"{"role":"robot","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_content_is_rejected() {
        let result = serde_json::from_str::<Message>(r#"{"role":"user"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_conversation_keeps_order() {
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());

        conversation.push(Message::user("first"));
        conversation.push(Message::assistant("second"));

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].content(), "first");
        assert_eq!(conversation.last().map(Message::role), Some(Role::Assistant));
    }
}
