//! # Chat Client
//!
//! File: cli/src/agent/client.rs
//!
//! ## Overview
//!
//! `ChatClient` owns the local conversation and enforces the turn protocol:
//! append the user's message, send the whole history, wait for exactly one
//! reply, append it. While a reply is pending, further submissions are
//! refused. When the exchange fails, a system message is appended so the
//! user sees what happened; nothing already in the conversation is removed.
//!
//! ## States
//!
//! ```text
//!            begin_turn                 complete_turn(Ok)
//!   Idle ───────────────▶ AwaitingReply ──────────────────▶ Idle
//!                              │
//!                              └── complete_turn(Err) ─────▶ Idle (+ system message)
//! ```
//!
//! `submit` runs both halves around a `Transport`. The halves are public so a
//! caller driving its own event loop can hold the request in flight.
//!
use super::message::{Conversation, Message};
use super::transport::Transport;
use super::wire::ChatRequest;
use crate::core::error::AgentError;
use tracing::{debug, warn};

/// Text of the system message appended when a turn fails.
pub const ERROR_NOTICE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Idle,
    AwaitingReply,
}

#[derive(Debug)]
pub struct ChatClient {
    conversation: Conversation,
    state: ClientState,
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatClient {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            state: ClientState::Idle,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == ClientState::AwaitingReply
    }

    /// # Begin a Turn (`begin_turn`)
    ///
    /// Trims `input`, appends it as a user message and switches to
    /// `AwaitingReply`.
    ///
    /// ## Returns
    ///
    /// * `Ok(ChatRequest)`: The request to send, holding the full history
    ///   including the new message.
    ///
    /// ## Errors
    ///
    /// * `AgentError::RequestInFlight` if a reply is still pending.
    /// * `AgentError::EmptyInput` if `input` is blank.
    ///
    /// Neither error changes the conversation.
    pub fn begin_turn(&mut self, input: &str) -> Result<ChatRequest, AgentError> {
        if self.is_awaiting_reply() {
            return Err(AgentError::RequestInFlight);
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(AgentError::EmptyInput);
        }

        self.conversation.push(Message::user(text));
        self.state = ClientState::AwaitingReply;
        debug!("Turn started; conversation has {} message(s)", self.conversation.len());

        Ok(ChatRequest {
            messages: self.conversation.messages().to_vec(),
        })
    }

    /// # Complete a Turn (`complete_turn`)
    ///
    /// Appends the assistant reply, or the `ERROR_NOTICE` system message when
    /// `outcome` is an error, and returns to `Idle`.
    ///
    /// ## Returns
    ///
    /// * `Ok(&Message)`: The message that was appended.
    ///
    /// ## Errors
    ///
    /// * `AgentError::Internal` if no turn was in progress.
    pub fn complete_turn(
        &mut self,
        outcome: Result<String, AgentError>,
    ) -> Result<&Message, AgentError> {
        if !self.is_awaiting_reply() {
            return Err(AgentError::Internal(
                "complete_turn called with no reply pending".to_string(),
            ));
        }

        let message = match outcome {
            Ok(reply) => Message::assistant(reply),
            Err(e) => {
                warn!("Chat turn failed: {}", e);
                Message::system(ERROR_NOTICE)
            }
        };
        self.conversation.push(message);
        self.state = ClientState::Idle;

        self.conversation
            .last()
            .ok_or_else(|| AgentError::Internal("conversation unexpectedly empty".to_string()))
    }

    /// # Submit a Message (`submit`)
    ///
    /// Runs a full turn: `begin_turn`, one `Transport::send`, `complete_turn`.
    /// Transport failures do not surface as `Err`; they end up as the system
    /// message returned in `Ok`.
    pub async fn submit<T>(&mut self, transport: &T, input: &str) -> Result<&Message, AgentError>
    where
        T: Transport + ?Sized,
    {
        let request = self.begin_turn(input)?;
        let outcome = transport.send(&request).await;
        self.complete_turn(outcome)
    }
}
