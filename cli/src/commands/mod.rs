//! # agentchat Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the top-level commands of the agentchat CLI. Each command
//! defines its own arguments struct and an async `handle_*` function that
//! `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `serve`: HTTP server with the chat page and the `/api/chat` endpoint
//! - `chat`: Interactive terminal chat client
//! - `ask`: Single question, single answer
//!

/// One-shot question. Prints a single reply.
pub mod ask;
/// Interactive terminal chat client.
pub mod chat;
/// HTTP chat server. Includes configuration, handlers and server logic.
pub mod serve;
