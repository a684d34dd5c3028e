//! # agentchat Serve Integration Tests
//!
//! File: cli/tests/serve.rs
//!
//! ## Overview
//!
//! Startup checks for `agentchat serve`. A server that starts successfully
//! runs until it is signalled, so these tests cover the paths that must fail
//! before binding. Request handling is tested against the router directly in
//! `server_logic.rs`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_serve_rejects_invalid_config_value() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(
        temp_dir.path().join(".agentchat.toml"),
        "[client]\nserver_url = \"localhost:3000\"\n",
    )
    .unwrap();

    agentchat_cmd_in(temp_dir.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("server_url must start with http://"));
}

#[test]
fn test_serve_rejects_unparseable_config() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(temp_dir.path().join(".agentchat.toml"), "[server\nport = ").unwrap();

    agentchat_cmd_in(temp_dir.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_serve_rejects_bad_host_argument() {
    agentchat_cmd()
        .args(["serve", "--host", "not-an-ip"])
        .assert()
        .failure();
}
