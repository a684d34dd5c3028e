//! # agentchat Conversation Domain
//!
//! File: cli/src/agent/mod.rs
//!
//! ## Overview
//!
//! Everything about the conversation itself, independent of how it is shown
//! or served:
//! - `message`: `Role`, `Message` and the append-only `Conversation`
//! - `responder`: the ordered keyword rules and their canned replies
//! - `client`: the `ChatClient` turn state machine
//! - `transport`: how a client reaches a responder (HTTP or in-process)
//! - `wire`: JSON request/response bodies and request validation
//! - `suggestions`: the four preset prompts for an empty conversation
//!
pub mod client;
pub mod message;
pub mod responder;
pub mod suggestions;
pub mod transport;
pub mod wire;
