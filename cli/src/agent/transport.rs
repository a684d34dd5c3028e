//! # Chat Transports
//!
//! File: cli/src/agent/transport.rs
//!
//! ## Overview
//!
//! A `Transport` carries one `ChatRequest` to a responder and brings back the
//! reply text. Two implementations exist:
//! - `HttpTransport`: posts the request to a running `agentchat serve` instance.
//! - `LocalTransport`: calls the rule-based responder in-process, for
//!   `agentchat chat --offline` and `agentchat ask`.
//!
//! Every failure, whether it is a refused connection, a non-2xx status or an
//! unreadable body, is reported as `AgentError::Transport` so the client can
//! treat them the same way.
//!
use super::responder;
use super::wire::{ChatRequest, ChatResponse, ErrorResponse};
use crate::core::error::AgentError;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Sends a conversation somewhere and returns the reply text.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<String, AgentError>;
}

/// Answers requests with the in-process responder.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTransport;

#[async_trait]
impl Transport for LocalTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, AgentError> {
        responder::respond(&request.messages)
    }
}

/// # HTTP Transport (`HttpTransport`)
///
/// Posts requests to `{base_url}/api/chat` with `reqwest`. No timeout is
/// configured: a request either completes or fails at the connection level.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Builds a transport for a server base URL such as `http://127.0.0.1:3000`.
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, AgentError> {
        debug!(
            "POST {} with {} message(s)",
            self.endpoint,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AgentError::Transport(format!("Failed to reach {}: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            // The body is only used to enrich the error message.
            let detail = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "no error details".to_string());
            warn!("Server answered {} for {}: {}", status, self.endpoint, detail);
            return Err(AgentError::Transport(format!(
                "Server returned {}: {}",
                status, detail
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Transport(format!("Invalid response body: {}", e)))?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::message::Message;

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        assert_eq!(
            HttpTransport::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/chat"
        );
        assert_eq!(
            HttpTransport::new("http://localhost:3000").endpoint(),
            "http://localhost:3000/api/chat"
        );
    }

    #[tokio::test]
    async fn test_local_transport_uses_responder() {
        let request = ChatRequest {
            messages: vec![Message::user("thank you!")],
        };
        let reply = LocalTransport.send(&request).await.unwrap();
        assert!(reply.starts_with("You're very welcome!"));
    }

    #[tokio::test]
    async fn test_http_transport_reports_unreachable_server() {
        // Port 9 (discard) on localhost is essentially never listening.
        let transport = HttpTransport::new("http://127.0.0.1:9");
        let request = ChatRequest {
            messages: vec![Message::user("hello")],
        };
        let result = transport.send(&request).await;
        assert!(matches!(result, Err(AgentError::Transport(_))));
    }
}
