//! # agentchat Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file in
//! this directory (other than this module) is compiled as a separate test
//! crate that runs the compiled `agentchat` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get agentchat Command (`agentchat_cmd`)
///
/// Creates an `assert_cmd::Command` for the `agentchat` binary built for this
/// test run. `AGENTCHAT_SERVER` is removed so a value in the developer's
/// environment cannot change which transport the commands use.
///
/// ## Panics
/// Panics if the `agentchat` binary cannot be found via `Command::cargo_bin`.
pub fn agentchat_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("agentchat").expect("Failed to find agentchat binary for testing");
    cmd.env_remove("AGENTCHAT_SERVER");
    cmd
}

/// Like `agentchat_cmd`, but runs inside `dir` with the user config directory
/// redirected there too, so only config files written by the test are seen.
pub fn agentchat_cmd_in(dir: &Path) -> Command {
    let mut cmd = agentchat_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}
