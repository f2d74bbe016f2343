//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::GameId;

/// Discriminates the failures an engine operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum ErrorKind {
    /// No game is stored under the requested id.
    #[display("game not found")]
    GameNotFound,
    /// The game already reached `Won` or `Lost`.
    #[display("game completed")]
    GameCompleted,
    /// The submitted guess does not satisfy the game's rules.
    #[display("invalid guess")]
    InvalidGuess,
    /// The hint budget is exhausted.
    #[display("out of hints")]
    OutOfHints,
    /// A rules field lies outside its allowed range.
    #[display("invalid rules")]
    InvalidRules,
    /// Rules ask for at least as many hints as there are positions.
    #[display("max hints too large")]
    MaxHintsTooLarge,
    /// Broken engine invariant or collaborator failure.
    #[display("internal error")]
    Internal,
}

impl ErrorKind {
    /// Returns `true` for errors caused by the caller's input.
    pub fn is_client_error(self) -> bool {
        !matches!(self, Self::Internal)
    }
}

/// Engine error with kind, client-facing message, and location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} at {}:{}", kind, message, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable message, safe to show to clients for client errors.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// No game stored under `id`.
    #[track_caller]
    pub fn game_not_found(id: GameId) -> Self {
        Self::new(
            ErrorKind::GameNotFound,
            format!("Could not find game with ID: {}", id),
        )
    }

    /// Mutation attempted on a finished game.
    #[track_caller]
    pub fn game_completed() -> Self {
        Self::new(
            ErrorKind::GameCompleted,
            "Game is already completed. Start a new game to continue playing!",
        )
    }

    /// Guess rejected by validation.
    #[track_caller]
    pub fn invalid_guess(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidGuess, reason)
    }

    /// Hint requested with no budget left.
    #[track_caller]
    pub fn out_of_hints() -> Self {
        Self::new(ErrorKind::OutOfHints, "You are out of hints! Good luck!")
    }

    /// Rules field outside its allowed range.
    #[track_caller]
    pub fn invalid_rules(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRules, reason)
    }

    /// Rules would let every position be revealed.
    #[track_caller]
    pub fn max_hints_too_large(max_hints: u32, code_length: u32) -> Self {
        Self::new(
            ErrorKind::MaxHintsTooLarge,
            format!(
                "maxHints ({}) must be smaller than codeLength ({})",
                max_hints, code_length
            ),
        )
    }

    /// Invariant violation or collaborator failure.
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<RepositoryError> for EngineError {
    #[track_caller]
    fn from(err: RepositoryError) -> Self {
        Self::internal(format!("Repository failure: {}", err.message))
    }
}

/// Repository error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Repository error: {} at {}:{}", message, file, line)]
pub struct RepositoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RepositoryError {
    /// Creates a new repository error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
