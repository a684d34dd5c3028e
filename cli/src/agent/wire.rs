//! # Wire Types
//!
//! File: cli/src/agent/wire.rs
//!
//! JSON bodies exchanged over `POST /api/chat` and `GET /api/health`, plus the
//! request validation that turns an arbitrary JSON body into a conversation.
//!
use super::message::Message;
use crate::core::error::AgentError;
use serde::{Deserialize, Serialize};

/// Error text returned when `messages` is missing, not an array, or holds an
/// element that is not a `{ role, content }` object.
pub const INVALID_MESSAGES: &str = "Invalid messages format";

/// Error text returned when the body is not JSON at all.
pub const INVALID_JSON: &str = "Invalid JSON body";

/// Error text returned for unexpected server-side failures.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Request body: the full conversation so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Successful reply body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Failure body, sent with status 400 or 500.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: String,
}

impl ChatRequest {
    /// # Parse Request Body (`from_body`)
    ///
    /// Validates a raw request body in stages so that each failure gets the
    /// right message: first the body must be JSON, then `messages` must be an
    /// array, then every element must be a well-formed message, and finally the
    /// array must not be empty.
    ///
    /// ## Errors
    ///
    /// * `AgentError::MalformedRequest` for the first three checks.
    /// * `AgentError::EmptyConversation` for an empty array.
    pub fn from_body(body: &[u8]) -> Result<Self, AgentError> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|_| AgentError::MalformedRequest(INVALID_JSON.to_string()))?;

        let raw_messages = match value {
            serde_json::Value::Object(mut map) => map.remove("messages"),
            _ => None,
        };
        let raw_messages = match raw_messages {
            Some(items @ serde_json::Value::Array(_)) => items,
            _ => return Err(AgentError::MalformedRequest(INVALID_MESSAGES.to_string())),
        };

        let messages: Vec<Message> = serde_json::from_value(raw_messages)
            .map_err(|_| AgentError::MalformedRequest(INVALID_MESSAGES.to_string()))?;

        if messages.is_empty() {
            return Err(AgentError::EmptyConversation);
        }

        Ok(Self { messages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::message::Role;

    fn malformed_text(result: Result<ChatRequest, AgentError>) -> String {
        match result {
            Err(AgentError::MalformedRequest(text)) => text,
            other => panic!("expected MalformedRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_body() {
        let body = br#"{"messages":[{"role":"user","content":"Hello there!"}]}"#;
        let request = ChatRequest::from_body(body).unwrap();
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role(), Role::User);
    }

    #[test]
    fn test_missing_messages() {
        assert_eq!(malformed_text(ChatRequest::from_body(b"{}")), INVALID_MESSAGES);
    }

    #[test]
    fn test_messages_not_an_array() {
        let body = br#"{"messages":"hello"}"#;
        assert_eq!(malformed_text(ChatRequest::from_body(body)), INVALID_MESSAGES);
    }

    #[test]
    fn test_element_without_content() {
        let body = br#"{"messages":[{"role":"user"}]}"#;
        assert_eq!(malformed_text(ChatRequest::from_body(body)), INVALID_MESSAGES);
    }

    #[test]
    fn test_messages_keep_order() {
        let body = br#"{"messages":[
            {"role":"user","content":"Hello there!"},
            {"role":"assistant","content":"Hello!"},
            {"role":"user","content":"thanks"}
        ]}"#;
        let request = ChatRequest::from_body(body).unwrap();
        let contents: Vec<&str> = request.messages.iter().map(|m| m.content()).collect();
        assert_eq!(contents, ["Hello there!", "Hello!", "thanks"]);
        assert_eq!(request.messages[1].role(), Role::Assistant);
    }

    #[test]
    fn test_body_not_an_object() {
        let body = br#"[{"role":"user","content":"hi"}]"#;
        assert_eq!(malformed_text(ChatRequest::from_body(body)), INVALID_MESSAGES);
    }

    #[test]
    fn test_unknown_role_in_earlier_message() {
        // Every element is validated, not only the last one the responder reads.
        let body = br#"{"messages":[
            {"role":"tool","content":"lookup result"},
            {"role":"user","content":"thanks"}
        ]}"#;
        assert_eq!(malformed_text(ChatRequest::from_body(body)), INVALID_MESSAGES);
    }

    #[test]
    fn test_not_json() {
        assert_eq!(malformed_text(ChatRequest::from_body(b"hello?")), INVALID_JSON);
    }

    #[test]
    fn test_empty_array() {
        let result = ChatRequest::from_body(br#"{"messages":[]}"#);
        assert!(matches!(result, Err(AgentError::EmptyConversation)));
    }
}
