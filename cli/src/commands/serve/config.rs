//! # agentchat Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Produces the effective `ServerConfig` for `agentchat serve` from three
//! layers:
//! 1. Command-line arguments (highest priority)
//! 2. The `[server]` section of the loaded configuration files
//! 3. Built-in defaults (lowest priority)
//!
//! A command-line value only wins when it differs from its clap default, since
//! clap cannot tell "not given" apart from "given with the default value".
//! `--no-cors` always wins when present.
//!
//! ## Examples
//!
//! ```rust
//! let file_config = core::config::load_config()?;
//! let config = merge_config(&args, &file_config.server);
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::config::ServerSection;
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `agentchat serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Network port to listen on. If it is taken, the next free port is used.
    #[arg(long, short, default_value_t = 3000)]
    pub port: u16,

    /// IP address to bind. Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Title shown in the browser tab and the page header.
    #[arg(long, default_value = "AI Agent")]
    pub title: String,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// Final settings used by the server logic after merging all layers.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    pub page_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&ServerSection::default())
    }
}

impl From<&ServerSection> for ServerConfig {
    fn from(section: &ServerSection) -> Self {
        Self {
            port: section.port,
            host: section.host,
            enable_cors: section.enable_cors,
            page_title: section.page_title.clone(),
        }
    }
}

/// # Merge Server Configuration (`merge_config`)
///
/// Starts from the file settings and overrides each one the user set
/// explicitly on the command line.
///
/// ## Arguments
///
/// * `args`: Parsed `ServeArgs`.
/// * `file`: The `[server]` section from the loaded configuration files
///   (already filled with defaults for anything the files left out).
///
/// ## Returns
///
/// * `ServerConfig`: The effective configuration.
pub fn merge_config(args: &ServeArgs, file: &ServerSection) -> ServerConfig {
    let cli_defaults = ServeArgs::parse_from([""]);
    let mut effective = ServerConfig::from(file);

    if args.port != cli_defaults.port {
        effective.port = args.port;
    }
    if args.host != cli_defaults.host {
        effective.host = args.host;
    }
    if args.title != cli_defaults.title {
        effective.page_title = args.title.clone();
    }
    if args.no_cors {
        effective.enable_cors = false;
    }

    debug!("Merged server config: {:?}", effective);
    effective
}
