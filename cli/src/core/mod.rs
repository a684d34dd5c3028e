//! # agentchat Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: TOML configuration loading, merging and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Rendering of the chat page served by `agentchat serve`
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{AgentError, Result}; // For error handling
//! use crate::core::templating; // For rendering the chat page
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
