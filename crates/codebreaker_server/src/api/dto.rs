//! Request and response bodies.

use codebreaker::{
    Digit, GameStatus, GameView, GuessRecord, GuessResult, HintReveal, RawGuess, Rules,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesRequest {
    /// Number of digits in the secret code.
    pub code_length: u32,
    /// Largest digit value.
    pub max_digit: u32,
    /// Guesses allowed.
    pub max_attempts: u32,
    /// Hints allowed; zero when omitted.
    #[serde(default)]
    pub max_hints: u32,
}

impl From<RulesRequest> for Rules {
    fn from(req: RulesRequest) -> Self {
        Rules::new(req.code_length, req.max_digit, req.max_attempts, req.max_hints)
    }
}

/// Body of `POST /game/guess`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    /// Target game.
    pub game_id: u64,
    /// Guessed digits; may be missing or contain nulls, which the engine
    /// rejects with a descriptive message.
    #[serde(default)]
    pub guess: RawGuess,
}

/// Rules as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesResponse {
    /// Number of digits in the secret code.
    pub code_length: u32,
    /// Largest digit value.
    pub max_digit: u32,
    /// Guesses allowed.
    pub max_attempts: u32,
    /// Hints allowed.
    pub max_hints: u32,
}

impl From<&Rules> for RulesResponse {
    fn from(rules: &Rules) -> Self {
        Self {
            code_length: rules.code_length(),
            max_digit: rules.max_digit(),
            max_attempts: rules.max_attempts(),
            max_hints: rules.max_hints(),
        }
    }
}

/// Feedback for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResultResponse {
    /// Correct digits regardless of position.
    pub correct_numbers: u32,
    /// Correct digits in the correct position.
    pub correct_locations: u32,
}

impl From<GuessResult> for GuessResultResponse {
    fn from(result: GuessResult) -> Self {
        Self {
            correct_numbers: result.total_matches(),
            correct_locations: result.exact_matches(),
        }
    }
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecordResponse {
    /// Guessed digits.
    pub guess: Vec<Digit>,
    /// Feedback.
    pub result: GuessResultResponse,
}

impl From<&GuessRecord> for GuessRecordResponse {
    fn from(record: &GuessRecord) -> Self {
        Self {
            guess: record.guess().clone(),
            result: (*record.result()).into(),
        }
    }
}

/// A revealed position, returned by the hint endpoint and listed in games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponse {
    /// Zero-based position.
    pub location: usize,
    /// Secret digit there.
    pub digit: Digit,
}

impl From<HintReveal> for HintResponse {
    fn from(reveal: HintReveal) -> Self {
        Self {
            location: reveal.location(),
            digit: reveal.digit(),
        }
    }
}

/// Client projection of a game. Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Game id.
    pub id: u64,
    /// Game rules.
    pub rules: RulesResponse,
    /// `IN_PROGRESS`, `WON` or `LOST`.
    pub status: GameStatus,
    /// Guesses used.
    pub attempts: u32,
    /// Guesses in submission order.
    pub history: Vec<GuessRecordResponse>,
    /// Hint budget.
    pub max_hints: u32,
    /// Hints used.
    pub hints_used: u32,
    /// Revealed positions in reveal order.
    pub hints: Vec<HintResponse>,
}

impl From<&GameView> for GameResponse {
    fn from(view: &GameView) -> Self {
        Self {
            id: view.id().value(),
            rules: view.rules().into(),
            status: view.status(),
            attempts: view.attempts(),
            history: view.history().iter().map(Into::into).collect(),
            max_hints: view.max_hints(),
            hints_used: view.hints_used(),
            hints: view.hints().iter().copied().map(Into::into).collect(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub message: String,
}
