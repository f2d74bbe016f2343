//! Route handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use codebreaker::{GameId, Rules};
use tracing::{info, instrument};

use super::AppState;
use super::dto::{GameResponse, GuessRequest, HintResponse, RulesRequest};
use super::error::ApiError;

/// `POST /game`
#[instrument(skip_all)]
pub async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<RulesRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let Json(request) = payload?;
    let view = state.engine.create_game(Rules::from(request)).await?;
    info!(game_id = %view.id(), "Created game");
    Ok((StatusCode::CREATED, Json(GameResponse::from(&view))))
}

/// `POST /game/guess`
#[instrument(skip_all)]
pub async fn submit_guess(
    State(state): State<AppState>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Json(request) = payload?;
    let view = state
        .engine
        .submit_guess(GameId::from(request.game_id), &request.guess)?;
    Ok(Json(GameResponse::from(&view)))
}

/// `GET /game/{id}`
#[instrument(skip_all)]
pub async fn get_game(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Path(id) = id?;
    let view = state.engine.find_game(GameId::from(id))?;
    Ok(Json(GameResponse::from(&view)))
}

/// `GET /game/hint/{id}`
#[instrument(skip_all)]
pub async fn get_hint(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<HintResponse>, ApiError> {
    let Path(id) = id?;
    let reveal = state.engine.issue_hint(GameId::from(id))?;
    Ok(Json(HintResponse::from(reveal)))
}
