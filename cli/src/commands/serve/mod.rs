//! # agentchat Chat Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `agentchat serve` runs the HTTP side of agentchat:
//! - `GET /`: the single-page chat interface
//! - `POST /api/chat`: the rule-based responder behind a JSON API
//! - `GET /api/health`: liveness check
//!
//! ## Architecture
//!
//! - `config.rs`: Command-line arguments and merging with the `[server]` file section
//! - `handlers.rs`: Axum handlers and HTTP error mapping
//! - `server_logic.rs`: Router construction, port selection and the serve loop
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default address (127.0.0.1:3000)
//! agentchat serve
//!
//! # Listen on all interfaces, port 8080, without CORS headers
//! agentchat serve --host 0.0.0.0 --port 8080 --no-cors
//!
//! # Talk to it
//! curl -s localhost:3000/api/chat \
//!   -H 'content-type: application/json' \
//!   -d '{"messages":[{"role":"user","content":"Hello there!"}]}'
//! ```
//!
use crate::core::config as core_config;
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

/// Command-line arguments and configuration merging for the server.
pub mod config;

/// Request handlers and error-to-response mapping.
pub mod handlers;

/// Axum router and serve loop.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Loads the configuration files, merges the command-line arguments on top
/// and runs the server until it is asked to shut down.
///
/// ## Errors
///
/// Propagates configuration errors and server startup failures.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let file_config = core_config::load_config()?;
    let server_config = config::merge_config(&args, &file_config.server);
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config).await
}
