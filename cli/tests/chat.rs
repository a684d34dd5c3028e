//! # agentchat Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives `agentchat chat --offline` through stdin and checks the transcript
//! written to stdout.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_offline_session() {
    agentchat_cmd()
        .args(["chat", "--offline"])
        .write_stdin("Hello there!\nthank you\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("👋 Hello! I'm your AI Agent"))
        .stdout(predicate::str::contains("Agent: Hello! 👋"))
        .stdout(predicate::str::contains("Agent: You're very welcome!"))
        .stdout(predicate::str::contains("Agent: Goodbye!"));
}

#[test]
fn test_chat_offline_suggestion_number() {
    agentchat_cmd()
        .args(["chat", "--offline"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You: Write a short story about a robot"))
        .stdout(predicate::str::contains("Agent: Here's a short story for you:"));
}

#[test]
fn test_chat_unreachable_server_shows_notice() {
    agentchat_cmd()
        .args(["chat", "--server", "http://127.0.0.1:9"])
        .write_stdin("hello\n/history\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "System: Sorry, I encountered an error. Please try again.",
        ))
        .stdout(predicate::str::contains("You: hello"));
}
