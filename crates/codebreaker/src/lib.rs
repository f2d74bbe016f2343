//! Codebreaker - a Mastermind-style game engine.
//!
//! A player creates a game with configurable [`Rules`], submits guesses
//! against a hidden digit sequence, and may request hints that reveal
//! secret positions one at a time.
//!
//! # Architecture
//!
//! - **Rules**: immutable game configuration
//! - **Scoring**: duplicate-aware exact/total match feedback
//! - **Validation**: guess shape and digit range checks
//! - **Hints**: lowest-unrevealed-position hint policy
//! - **Engine**: game lifecycle, id allocation, per-game serialization
//! - **Collaborators**: [`GameRepository`] storage and [`CodeSource`]
//!   secret generation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use codebreaker::{GameEngine, GameStatus, LocalCodeSource, RawGuess, Rules};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), codebreaker::EngineError> {
//! let engine = GameEngine::in_memory(Arc::new(LocalCodeSource::seeded(7)));
//! let game = engine.create_game(Rules::new(4, 7, 10, 1)).await?;
//!
//! let hint = engine.issue_hint(game.id())?;
//! assert_eq!(hint.location(), 0);
//!
//! let view = engine.submit_guess(game.id(), &RawGuess::from(vec![0i64, 1, 2, 3]))?;
//! assert_eq!(view.attempts(), 1);
//! assert_ne!(view.status(), GameStatus::Lost);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod code_source;
mod engine;
mod error;
mod game;
mod hints;
mod repository;
mod rules;
mod scoring;
mod validation;

pub use code_source::{CodeSource, LocalCodeSource};
pub use engine::{GameEngine, next_status};
pub use error::{EngineError, ErrorKind, RepositoryError};
pub use game::{
    Game, GameId, GameStatus, GameView, GuessRecord, GuessResult, HintLedger, HintReveal,
};
pub use repository::{GameRepository, InMemoryGameRepository};
pub use rules::{CODE_LENGTH_RANGE, Digit, MAX_ATTEMPTS_RANGE, MAX_DIGIT_RANGE, Rules};
pub use scoring::score;
pub use validation::{RawGuess, validate};
