//! # agentchat Page Templating
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders the single chat page served at `GET /`. The template lives in
//! `cli/templates/index.html.tera` and is compiled into the binary, so the
//! server has no files to locate at runtime.
//!
//! The page is rendered once when the server starts; the values it depends on
//! (title and the preset suggestions) do not change while the server runs.
//!
//! ## Template Variables
//!
//! - `title`: page title and header text
//! - `description`: `<meta name="description">` content
//! - `suggestions`: list of `{ title, description, prompt }` for the empty state
//!
use crate::agent::suggestions::Suggestion;
use crate::core::error::{AgentError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

/// The chat page template, embedded at compile time.
const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.tera");

/// Default `<meta name="description">` text.
pub const PAGE_DESCRIPTION: &str = "Intelligent AI agent assistant";

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    description: &'a str,
    suggestions: &'a [Suggestion],
}

/// # Render Chat Page (`render_chat_page`)
///
/// Renders the chat page with autoescaping enabled, so a title taken from a
/// config file cannot inject markup.
///
/// ## Arguments
///
/// * `title`: Text for `<title>` and the page header.
/// * `suggestions`: Preset prompts shown while the conversation is empty.
///
/// ## Returns
///
/// * `Result<String>`: The complete HTML document.
///
/// ## Errors
///
/// Returns an `AgentError::Template` (wrapped with context) if Tera fails to
/// build the context or render the template.
pub fn render_chat_page(title: &str, suggestions: &[Suggestion]) -> Result<String> {
    let page = PageContext {
        title,
        description: PAGE_DESCRIPTION,
        suggestions,
    };
    let tera_context = tera::Context::from_serialize(&page).map_err(|e| {
        anyhow!(AgentError::Template { source: e }).context("Failed to create Tera context for chat page")
    })?;

    let html = Tera::one_off(PAGE_TEMPLATE, &tera_context, true).map_err(|e| {
        anyhow!(AgentError::Template { source: e }).context("Tera rendering failed for chat page")
    })?;

    debug!("Rendered chat page ({} bytes)", html.len());
    Ok(html)
}
