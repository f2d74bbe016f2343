//! End-to-end tests for the REST API.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use codebreaker::{CodeSource, Digit, GameEngine, Rules};
use codebreaker_server::{AppState, router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: [Digit; 4] = [1, 1, 2, 3];

struct FixedCodeSource(Vec<Digit>);

#[async_trait]
impl CodeSource for FixedCodeSource {
    async fn generate_code(&self, _rules: &Rules) -> Vec<Digit> {
        self.0.clone()
    }
}

fn app() -> Router {
    let engine = GameEngine::in_memory(Arc::new(FixedCodeSource(SECRET.to_vec())));
    router(AppState::new(engine))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create(app: &Router, max_hints: u32) -> u64 {
    let (status, body) = send(
        app,
        post(
            "/game",
            json!({"codeLength": 4, "maxDigit": 7, "maxAttempts": 10, "maxHints": max_hints}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap()
}

#[tokio::test]
async fn test_create_game_returns_projection() {
    let app = app();
    let (status, body) = send(
        &app,
        post(
            "/game",
            json!({"codeLength": 4, "maxDigit": 7, "maxAttempts": 10, "maxHints": 3}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 0);
    assert_eq!(body["status"], "IN_PROGRESS");
    assert_eq!(body["attempts"], 0);
    assert_eq!(body["history"], json!([]));
    assert_eq!(body["maxHints"], 3);
    assert_eq!(body["hintsUsed"], 0);
    assert_eq!(body["hints"], json!([]));
    assert_eq!(
        body["rules"],
        json!({"codeLength": 4, "maxDigit": 7, "maxAttempts": 10, "maxHints": 3})
    );
    assert!(body.get("secretCode").is_none());
}

#[tokio::test]
async fn test_ids_increase_per_game() {
    let app = app();
    assert_eq!(create(&app, 0).await, 0);
    assert_eq!(create(&app, 0).await, 1);
    assert_eq!(create(&app, 0).await, 2);
}

#[tokio::test]
async fn test_max_hints_defaults_to_zero() {
    let app = app();
    let (status, body) = send(
        &app,
        post("/game", json!({"codeLength": 4, "maxDigit": 7, "maxAttempts": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["maxHints"], 0);
}

#[tokio::test]
async fn test_hint_budget_must_leave_a_position() {
    let app = app();
    let (status, body) = send(
        &app,
        post(
            "/game",
            json!({"codeLength": 4, "maxDigit": 7, "maxAttempts": 10, "maxHints": 4}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("maxHints"));

    // Rejected games do not consume ids.
    assert_eq!(create(&app, 0).await, 0);
}

#[tokio::test]
async fn test_rules_out_of_bounds() {
    let app = app();
    let (status, body) = send(
        &app,
        post("/game", json!({"codeLength": 11, "maxDigit": 7, "maxAttempts": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("codeLength"));

    let (status, body) = send(
        &app,
        post("/game", json!({"codeLength": 4, "maxDigit": 7, "maxAttempts": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "maxAttempts must be between 1 and 20, got 0");

    assert_eq!(create(&app, 0).await, 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/game")
        .header("content-type", "application/json")
        .body(Body::from("{\"codeLength\": 4,"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_guess_scores_and_records_history() {
    let app = app();
    let id = create(&app, 0).await;

    let (status, body) = send(
        &app,
        post("/game/guess", json!({"gameId": id, "guess": [1, 2, 3, 4]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attempts"], 1);
    assert_eq!(body["status"], "IN_PROGRESS");
    assert_eq!(
        body["history"],
        json!([{"guess": [1, 2, 3, 4], "result": {"correctNumbers": 3, "correctLocations": 1}}])
    );
}

#[tokio::test]
async fn test_exact_guess_wins_and_freezes_game() {
    let app = app();
    let id = create(&app, 0).await;

    let (_, body) = send(&app, post("/game/guess", json!({"gameId": id, "guess": SECRET}))).await;
    assert_eq!(body["status"], "WON");

    let (status, body) =
        send(&app, post("/game/guess", json!({"gameId": id, "guess": [0, 0, 0, 0]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Game is already completed. Start a new game to continue playing!"
    );
}

#[tokio::test]
async fn test_invalid_guesses_are_rejected() {
    let app = app();
    let id = create(&app, 0).await;

    for guess in [
        json!([1, 2, 3]),
        json!([1, 2, 3, 8]),
        json!([1, -1, 2, 3]),
        json!([1, null, 2, 3]),
        json!([]),
        Value::Null,
    ] {
        let (status, body) =
            send(&app, post("/game/guess", json!({"gameId": id, "guess": guess}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "guess {guess}");
        assert!(body["message"].is_string());
    }

    let (_, body) = send(&app, get(&format!("/game/{id}"))).await;
    assert_eq!(body["attempts"], 0);
}

#[tokio::test]
async fn test_unknown_game_is_not_found() {
    let app = app();

    let (status, body) = send(&app, get("/game/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Could not find game with ID: 42");

    let (status, _) = send(
        &app,
        post("/game/guess", json!({"gameId": 42, "guess": [1, 2, 3, 4]})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/game/hint/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app();
    let (status, _) = send(&app, get("/game/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_hints_reveal_positions_in_order() {
    let app = app();
    let id = create(&app, 2).await;

    let (status, body) = send(&app, get(&format!("/game/hint/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"location": 0, "digit": 1}));

    let (_, body) = send(&app, get(&format!("/game/hint/{id}"))).await;
    assert_eq!(body, json!({"location": 1, "digit": 1}));

    let (status, body) = send(&app, get(&format!("/game/hint/{id}"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You are out of hints! Good luck!");

    let (_, body) = send(&app, get(&format!("/game/{id}"))).await;
    assert_eq!(body["hintsUsed"], 2);
    assert_eq!(
        body["hints"],
        json!([{"location": 0, "digit": 1}, {"location": 1, "digit": 1}])
    );
}
