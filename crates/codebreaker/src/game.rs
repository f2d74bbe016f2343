//! Core domain types for a code-breaking game.

use derive_getters::Getters;
use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

use crate::{Digit, Rules};

/// Engine-assigned game identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Returns the raw numeric id.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Lifecycle state of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Game accepts guesses and hints.
    InProgress,
    /// Secret was guessed.
    Won,
    /// Attempt budget ran out.
    Lost,
}

impl GameStatus {
    /// Returns `true` for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Feedback for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, new, Serialize, Deserialize)]
pub struct GuessResult {
    /// Digits correct and in the correct position.
    #[getter(copy)]
    exact_matches: u32,
    /// Digits correct regardless of position, exact ones included.
    #[getter(copy)]
    total_matches: u32,
}

impl GuessResult {
    /// Digits present in the secret but placed elsewhere.
    pub fn misplaced(&self) -> u32 {
        self.total_matches - self.exact_matches
    }
}

/// A submitted guess together with its feedback.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The digits as submitted.
    guess: Vec<Digit>,
    /// Feedback computed against the secret.
    result: GuessResult,
}

/// A revealed secret position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, new, Serialize, Deserialize)]
pub struct HintReveal {
    /// Zero-based position in the code.
    #[getter(copy)]
    location: usize,
    /// Secret digit at that position.
    #[getter(copy)]
    digit: Digit,
}

/// Reveal-ordered record of hinted positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintLedger {
    reveals: Vec<HintReveal>,
    positions: HashSet<usize>,
}

impl HintLedger {
    /// Returns `true` if `location` was already revealed.
    pub fn is_revealed(&self, location: usize) -> bool {
        self.positions.contains(&location)
    }

    /// Reveals in the order they were issued.
    pub fn reveals(&self) -> &[HintReveal] {
        &self.reveals
    }

    /// Number of revealed positions.
    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    /// Returns `true` if nothing has been revealed.
    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }

    /// Records a reveal. Returns `false` and leaves the ledger untouched if
    /// the position was already revealed.
    pub(crate) fn record(&mut self, reveal: HintReveal) -> bool {
        if !self.positions.insert(reveal.location) {
            return false;
        }
        self.reveals.push(reveal);
        true
    }
}

/// Mutable game aggregate.
///
/// Only the engine mutates a game; everyone else reads it through accessors
/// or a [`GameView`]. The secret code has no public accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    rules: Rules,
    secret_code: Vec<Digit>,
    status: GameStatus,
    attempts: u32,
    history: Vec<GuessRecord>,
    hints_used: u32,
    hints: HintLedger,
}

impl Game {
    /// Creates a game in `InProgress` with an empty history.
    #[instrument(skip(secret_code), fields(game_id = %id))]
    pub(crate) fn new(id: GameId, rules: Rules, secret_code: Vec<Digit>) -> Self {
        Self {
            id,
            rules,
            secret_code,
            status: GameStatus::InProgress,
            attempts: 0,
            history: Vec::new(),
            hints_used: 0,
            hints: HintLedger::default(),
        }
    }

    /// Returns the game id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of accepted guesses.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns guesses in submission order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Returns the number of hints issued.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns the hint ledger.
    pub fn hints(&self) -> &HintLedger {
        &self.hints
    }

    /// Returns `true` while hints remain in the budget.
    pub fn can_use_hint(&self) -> bool {
        self.hints_used < self.rules.max_hints()
    }

    pub(crate) fn secret_code(&self) -> &[Digit] {
        &self.secret_code
    }

    /// Appends a scored guess and counts the attempt.
    pub(crate) fn record_guess(&mut self, record: GuessRecord) {
        self.history.push(record);
        self.attempts += 1;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Records a reveal and counts it against the budget.
    pub(crate) fn record_hint(&mut self, reveal: HintReveal) -> bool {
        let recorded = self.hints.record(reveal);
        if recorded {
            self.hints_used += 1;
        }
        recorded
    }

    /// Builds the read-only projection.
    pub fn view(&self) -> GameView {
        GameView {
            id: self.id,
            rules: self.rules,
            status: self.status,
            attempts: self.attempts,
            history: self.history.clone(),
            max_hints: self.rules.max_hints(),
            hints_used: self.hints_used,
            hints: self.hints.reveals().to_vec(),
        }
    }
}

/// Immutable snapshot of a game, without the secret.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Game id.
    #[getter(copy)]
    id: GameId,
    /// Rules the game was created with.
    rules: Rules,
    /// Lifecycle state.
    #[getter(copy)]
    status: GameStatus,
    /// Accepted guesses so far.
    #[getter(copy)]
    attempts: u32,
    /// Guesses in submission order.
    history: Vec<GuessRecord>,
    /// Hint budget.
    #[getter(copy)]
    max_hints: u32,
    /// Hints issued so far.
    #[getter(copy)]
    hints_used: u32,
    /// Revealed positions in reveal order.
    hints: Vec<HintReveal>,
}
