//! # agentchat HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! Runs the chat server for `agentchat serve`:
//! - Renders the chat page once and shares it through `AppState`
//! - Mounts the page, `/api/chat` and `/api/health` routes
//! - Falls forward to the next free port if the configured one is taken
//! - Shuts down gracefully on Ctrl+C or SIGTERM
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Find an available port, starting from the configured one
//! 2. Build the router with tracing, CORS and panic-catching middleware
//! 3. Print the connection banner
//! 4. Serve until a shutdown signal arrives
//!
//! The responder keeps no state between requests, so concurrent requests need
//! no coordination; the only shared value is the immutable rendered page.
//!
use super::config::ServerConfig;
use super::handlers::{self, AppState};
use crate::agent::suggestions::SUGGESTIONS;
use crate::core::error::Result;
use crate::core::templating;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// How many consecutive ports `run_server` tries before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Initializes and starts the Axum server according to `config`.
///
/// ## Errors
///
/// Returns an error if no port is available, the page template fails to
/// render, the listener cannot be bound, or the server fails while running.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let app = create_app(&config)?;

    println!("\n=================================================================");
    println!("🤖 {} is ready", config.page_title);
    println!("🌐 Chat page:         http://{}", addr);
    println!("📮 Chat endpoint:     POST http://{}/api/chat", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");
    println!("Server starting! Press Ctrl+C to stop.");

    info!("Starting chat server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port`, then the following ports, up to `max_attempts` in
/// total. The probe listener is dropped before returning so the caller can
/// bind the address itself.
///
/// ## Errors
///
/// Returns an error if every attempted port is unavailable.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    for attempt in 0..max_attempts {
        let Some(port) = start_port.checked_add(u16::from(attempt)) else {
            break;
        };
        let addr = SocketAddr::new(req_host, port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    port,
                    req_host,
                    e
                );
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Renders the chat page and builds the router with all routes and
/// middleware. Middleware order, outermost first: tracing, CORS, panic
/// catching. Request bodies are not size-limited, so conversations of any
/// length reach the responder.
///
/// ## Errors
///
/// Returns an error if the chat page template fails to render.
pub fn create_app(config: &ServerConfig) -> Result<Router> {
    let page = templating::render_chat_page(&config.page_title, &SUGGESTIONS)?;
    let state = AppState {
        page: Arc::from(page),
        started_at: chrono::Utc::now(),
    };

    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(Router::new()
        .route("/", get(handlers::chat_page))
        .route("/api/chat", post(handlers::chat))
        .layer(DefaultBodyLimit::disable())
        .route("/api/health", get(handlers::health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer)
                .layer(CatchPanicLayer::custom(handlers::handle_panic)),
        ))
}
