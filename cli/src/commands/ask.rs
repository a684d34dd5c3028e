//! # agentchat One-Shot Ask
//!
//! File: cli/src/commands/ask.rs
//!
//! `agentchat ask <TEXT>...` sends a single user message and prints the reply.
//! Words are joined with spaces, so quoting is optional. The built-in
//! responder answers unless `--server` points at a running `agentchat serve`.
//!
//! Unlike the interactive client, a failed exchange is reported as an error
//! and the process exits with status 1.
//!
use crate::agent::client::ChatClient;
use crate::agent::transport::{HttpTransport, LocalTransport, Transport};
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Ask a running server instead of the built-in responder.
    #[arg(long, env = "AGENTCHAT_SERVER")]
    pub server: Option<String>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let text = args.text.join(" ");
    let transport: Box<dyn Transport> = match &args.server {
        Some(url) => Box::new(HttpTransport::new(url)),
        None => Box::new(LocalTransport),
    };

    let mut client = ChatClient::new();
    let request = client.begin_turn(&text)?;
    debug!("Asking with {} message(s)", request.messages.len());
    let reply = transport.send(&request).await?;

    println!("{}", reply);
    Ok(())
}
