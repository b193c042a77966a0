//! Rolodex UI - form/table frontend for the user directory.
//!
//! This binary serves the directory page on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side rendering
//! - A typed client state machine ([`client::ClientState`]) driven by
//!   explicit commands
//! - A record-store seam with two implementations: purely in-memory
//!   (`UI_BACKEND=local`) or synced against the API service
//!   (`UI_BACKEND=remote`, the default)

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod api;
mod client;
mod config;
mod routes;
mod state;
mod store;
mod view;

use api::ApiClient;
use client::{ClientState, Command};
use config::{BackendKind, UiConfig};
use state::AppState;
use store::{Backend, LocalStore, RemoteStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rolodex_ui=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = UiConfig::from_env().expect("Failed to load configuration");

    let store = match config.backend {
        BackendKind::Local => {
            tracing::info!("using in-memory record store");
            Backend::Local(LocalStore::new())
        }
        BackendKind::Remote => {
            tracing::info!(api_url = %config.api_url, "syncing against API service");
            Backend::Remote(RemoteStore::new(ApiClient::new(&config.api_url)))
        }
    };

    // Build application state with an initial list fetch. A failure here is
    // not fatal - it lands in the notice banner like any other.
    let mut client = ClientState::new();
    client.dispatch(Command::Refresh, &store).await;
    let state = AppState::new(client, store);

    // Build router
    let app = Router::new()
        .merge(routes::routes())
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new("crates/ui/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("ui listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
