//! # agentchat Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads agentchat settings from up to two TOML files and merges them:
//! 1. User configuration: `config.toml` in the platform config directory
//!    (e.g. `~/.config/agentchat/config.toml` on Linux)
//! 2. Project configuration: `.agentchat.toml` in the current directory or the
//!    nearest ancestor, searching upward until a `.git` directory is found
//!
//! Project values override user values whenever they differ from the built-in
//! defaults. Command-line flags are layered on top by the individual commands.
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! enable_cors = false
//! page_title = "Team Agent"
//!
//! [client]
//! server_url = "http://chat.internal:8080"
//! ```
//!
use crate::core::error::{AgentError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILENAME: &str = ".agentchat.toml";

/// Main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub client: ClientSection,
}

/// Settings for `agentchat serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
    /// Shown in the browser tab and the page header.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

/// Settings for `agentchat chat` and `agentchat ask --server`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

pub fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
pub fn default_port() -> u16 {
    3000
}
fn default_enable_cors() -> bool {
    true
}
pub fn default_page_title() -> String {
    "AI Agent".to_string()
}
pub fn default_server_url() -> String {
    format!("http://{}:{}", default_host(), default_port())
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
            page_title: default_page_title(),
        }
    }
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

/// # Load Configuration (`load_config`)
///
/// Reads the user and project configuration files (both optional), merges
/// them and validates the result.
///
/// ## Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if the
/// merged configuration fails validation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "agentchat", "agentchat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in {} or its ancestors.",
            PROJECT_CONFIG_FILENAME,
            start_dir.display()
        );
        Ok(None)
    }
}

/// Walks from `start_dir` towards the filesystem root looking for
/// `.agentchat.toml`. The search stops at the first directory containing `.git`.
fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();

    Config {
        server: ServerSection {
            host: if project.server.host != defaults.server.host {
                project.server.host
            } else {
                user.server.host
            },
            port: if project.server.port != defaults.server.port {
                project.server.port
            } else {
                user.server.port
            },
            enable_cors: if project.server.enable_cors != defaults.server.enable_cors {
                project.server.enable_cors
            } else {
                user.server.enable_cors
            },
            page_title: if project.server.page_title != defaults.server.page_title {
                project.server.page_title
            } else {
                user.server.page_title
            },
        },
        client: ClientSection {
            server_url: if project.client.server_url != defaults.client.server_url {
                project.client.server_url
            } else {
                user.client.server_url
            },
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let url = &config.client.server_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(anyhow!(AgentError::Config(format!(
            "client.server_url must start with http:// or https://, got '{}'",
            url
        ))));
    }
    if config.server.page_title.trim().is_empty() {
        return Err(anyhow!(AgentError::Config(
            "server.page_title cannot be empty".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
