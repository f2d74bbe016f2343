//! HTTP server for the codebreaker game.
//!
//! Wires [`codebreaker::GameEngine`] to a JSON REST API, loads
//! [`ServerConfig`] from TOML, and sources secret codes either locally or
//! from random.org.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod random_org;

pub use api::{AppState, router};
pub use config::{CodeSourceKind, ConfigError, ServerConfig};
pub use random_org::{RandomOrgCodeSource, RandomOrgError, parse_code};

use codebreaker::{CodeSource, GameEngine, LocalCodeSource};
use std::sync::Arc;
use tracing::{info, instrument};

/// Builds the code source selected by `config`.
#[instrument(skip(config), fields(kind = %config.code_source()))]
pub fn build_code_source(config: &ServerConfig) -> Arc<dyn CodeSource> {
    match config.code_source() {
        CodeSourceKind::Local => Arc::new(LocalCodeSource::new()),
        CodeSourceKind::RandomOrg => Arc::new(RandomOrgCodeSource::new(
            config.random_org_url().clone(),
            config.random_org_timeout(),
        )),
    }
}

/// Binds the configured address and serves until the process stops.
///
/// # Errors
///
/// Fails if the listener cannot bind or the server stops with an I/O error.
#[instrument(skip(config), fields(address = %config.bind_address()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let engine = GameEngine::in_memory(build_code_source(&config));
    let app = router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server ready at http://{}/", config.bind_address());

    axum::serve(listener, app).await?;
    info!("Server stopped");
    Ok(())
}
