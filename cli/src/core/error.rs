//! # agentchat Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout agentchat. The server
//! maps them onto HTTP status codes, the terminal client turns them into
//! visible system messages, and `main` reports anything left over.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `AgentError`: A custom error enum using `thiserror` for the failures that
//!   callers need to tell apart (malformed requests, a turn already in flight, ...)
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used for plumbing code
//!   where adding context matters more than matching on the error kind
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if conversation.is_empty() {
//!     return Err(AgentError::EmptyConversation);
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match err.downcast_ref::<AgentError>() {
//!     Some(AgentError::RequestInFlight) => println!("Still thinking..."),
//!     _ => return Err(err),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for agentchat.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request body did not have the `{ messages: [...] }` shape.
    #[error("{0}")]
    MalformedRequest(String),

    #[error("Conversation must contain at least one message")]
    EmptyConversation,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("A reply is already pending; wait for it before sending another message.")]
    RequestInFlight,

    #[error("Message cannot be empty.")]
    EmptyInput,

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AgentError {
    /// True for errors caused by the caller's input rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AgentError::MalformedRequest(_) | AgentError::EmptyConversation
        )
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = AgentError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let malformed = AgentError::MalformedRequest("Invalid messages format".into());
        assert_eq!(malformed.to_string(), "Invalid messages format");

        assert_eq!(
            AgentError::EmptyConversation.to_string(),
            "Conversation must contain at least one message"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AgentError::MalformedRequest("x".into()).is_client_error());
        assert!(AgentError::EmptyConversation.is_client_error());
        assert!(!AgentError::Internal("boom".into()).is_client_error());
        assert!(!AgentError::Transport("refused".into()).is_client_error());
    }
}
