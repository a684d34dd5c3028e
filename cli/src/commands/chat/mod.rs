//! # agentchat Terminal Chat
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! `agentchat chat` is the terminal rendition of the chat page. It shows the
//! four suggestions while the conversation is empty, then reads one line per
//! turn and prints the reply. Typing a suggestion's number sends its prompt.
//!
//! By default it talks to a running `agentchat serve` over HTTP (address from
//! `--server`, `AGENTCHAT_SERVER`, or `client.server_url` in the config files).
//! With `--offline` the responder runs in-process and no server is needed.
//!
//! ## Examples
//!
//! ```bash
//! agentchat chat
//! agentchat chat --server http://10.0.0.5:3000
//! agentchat chat --offline
//! ```
//!
//! Session commands: `/quit` or `bye` to leave, `/history` to reprint the
//! conversation.
//!
use crate::agent::client::ChatClient;
use crate::agent::message::{Message, Role};
use crate::agent::suggestions::SUGGESTIONS;
use crate::agent::transport::{HttpTransport, LocalTransport, Transport};
use crate::core::config;
use crate::core::error::{AgentError, Result};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Base URL of the agentchat server, e.g. `http://127.0.0.1:3000`.
    #[arg(long, env = "AGENTCHAT_SERVER", conflicts_with = "offline")]
    pub server: Option<String>,

    /// Answer locally with the built-in responder instead of contacting a server.
    #[arg(long)]
    pub offline: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Picks a transport and runs an interactive session on stdin/stdout until
/// the user quits or input ends.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    debug!("Handling chat command with args: {:?}", args);

    let transport: Box<dyn Transport> = if args.offline {
        info!("Using in-process responder.");
        Box::new(LocalTransport)
    } else {
        let server_url = match args.server {
            Some(url) => url,
            None => config::load_config()?.client.server_url,
        };
        let transport = HttpTransport::new(&server_url);
        info!("Using server endpoint {}", transport.endpoint());
        Box::new(transport)
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(stdin, &mut stdout, transport.as_ref()).await
}

/// Maps "1".."4" onto the matching suggestion prompt.
fn resolve_suggestion(input: &str) -> Option<&'static str> {
    let index: usize = input.parse().ok()?;
    SUGGESTIONS
        .get(index.checked_sub(1)?)
        .map(|suggestion| suggestion.prompt)
}

fn print_empty_state<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "🤖 AI Agent")?;
    writeln!(out, "👋 Hello! I'm your AI Agent")?;
    writeln!(out, "I can help you with various tasks. Try asking me something!")?;
    for (number, suggestion) in SUGGESTIONS.iter().enumerate() {
        writeln!(
            out,
            "  [{}] {} - {}",
            number + 1,
            suggestion.title,
            suggestion.description
        )?;
    }
    writeln!(out, "Type a number to use a suggestion, /quit to leave.")?;
    Ok(())
}

fn print_message<W: Write>(out: &mut W, message: &Message) -> Result<()> {
    let label = match message.role() {
        Role::User => "You",
        Role::Assistant => "Agent",
        Role::System => "System",
    };
    writeln!(out, "{}: {}\n", label, message.content())?;
    Ok(())
}

/// # Run Chat Session (`run_session`)
///
/// The read-submit-print loop, generic over its input and output so it can be
/// driven from tests.
///
/// ## Arguments
///
/// * `input`: Line source (stdin in production).
/// * `out`: Where prompts and replies are written.
/// * `transport`: How each turn reaches the responder.
pub async fn run_session<R, W>(input: R, out: &mut W, transport: &dyn Transport) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut client = ChatClient::new();
    let mut lines = input.lines();

    print_empty_state(out)?;

    loop {
        write!(out, "You: ")?;
        out.flush().context("Failed to flush output")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(out)?;
            break;
        };
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("/quit") || trimmed.eq_ignore_ascii_case("bye") {
            writeln!(out, "Agent: Goodbye!")?;
            break;
        }
        if trimmed.eq_ignore_ascii_case("/history") {
            if client.conversation().is_empty() {
                writeln!(out, "(no messages yet)")?;
            }
            for message in client.conversation().messages() {
                print_message(out, message)?;
            }
            continue;
        }

        let text = match resolve_suggestion(trimmed) {
            Some(prompt) => {
                writeln!(out, "You: {}", prompt)?;
                prompt
            }
            None => trimmed,
        };
        if text.is_empty() {
            continue;
        }

        writeln!(out, "Thinking...")?;
        match client.submit(transport, text).await {
            Ok(message) => print_message(out, message)?,
            Err(AgentError::EmptyInput) => continue,
            Err(e) => writeln!(out, "System: {}", e)?,
        }
    }

    debug!(
        "Chat session ended in state {:?} after {} message(s)",
        client.state(),
        client.conversation().len()
    );
    Ok(())
}
