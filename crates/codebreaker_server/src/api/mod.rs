//! REST surface over the game engine.
//!
//! | Method | Path              | Success                 |
//! |--------|-------------------|-------------------------|
//! | POST   | `/game`           | 201 game                |
//! | POST   | `/game/guess`     | 200 game                |
//! | GET    | `/game/{id}`      | 200 game                |
//! | GET    | `/game/hint/{id}` | 200 `{location, digit}` |
//!
//! Failures carry a `{message}` body: 404 for unknown games, 400 for rule
//! violations and malformed input, 500 for anything else.

pub mod dto;
pub mod error;
pub mod handlers;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{get, post};
use codebreaker::GameEngine;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// The engine every request talks to.
    pub engine: Arc<GameEngine>,
}

impl AppState {
    /// Wraps an engine for sharing across requests.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", post(handlers::create_game))
        .route("/game/guess", post(handlers::submit_guess))
        .route("/game/{id}", get(handlers::get_game))
        .route("/game/hint/{id}", get(handlers::get_hint))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}
