//! # agentchat Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the agentchat CLI, a small rule-based chat agent. It
//! handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the `serve`, `chat` and `ask` command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start the server and open http://127.0.0.1:3000
//! agentchat serve
//!
//! # Chat in the terminal without a server
//! agentchat chat --offline
//!
//! # One question, with debug logging
//! agentchat -vv ask "Explain quantum computing simply"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod agent; // Conversation model, responder, client and transports
mod commands; // Command handlers (serve, chat, ask)
mod core; // Core infrastructure (errors, config, templating)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "agentchat",
    about = "🤖 agentchat: a tiny rule-based chat agent",
    long_about = "Serve a single-page chat interface backed by a keyword-matching responder,\n\
                  or talk to it from the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the HTTP server (chat page + JSON API).
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Chat interactively in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Send one message and print the reply.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
