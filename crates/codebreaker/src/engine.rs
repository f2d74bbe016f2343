//! Game engine: creation, guessing, hints and the status state machine.
//!
//! The engine owns the id counter and is the only writer of [`Game`]
//! values. Guesses and hints on the same game are serialized through a
//! per-game lock held across the whole load, mutate, save sequence, so
//! concurrent requests never lose each other's updates. Different games
//! never contend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info, instrument, warn};

use crate::hints::reveal_next;
use crate::scoring::score;
use crate::validation::validate;
use crate::{
    CodeSource, EngineError, Game, GameId, GameRepository, GameStatus, GameView, GuessRecord,
    GuessResult, HintReveal, InMemoryGameRepository, RawGuess, Rules,
};

/// Decides the status after a scored guess has been recorded.
///
/// A fully exact guess wins even on the final attempt.
#[instrument(level = "debug", skip(rules))]
pub fn next_status(rules: &Rules, attempts: u32, result: GuessResult) -> GameStatus {
    if result.exact_matches() == rules.code_length() {
        GameStatus::Won
    } else if attempts == rules.max_attempts() {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

/// Orchestrates games on top of a repository and a code source.
pub struct GameEngine {
    repository: Arc<dyn GameRepository>,
    code_source: Arc<dyn CodeSource>,
    next_id: AtomicU64,
    game_locks: Mutex<HashMap<GameId, Arc<Mutex<()>>>>,
}

impl GameEngine {
    /// Creates an engine; ids start at 0.
    #[instrument(skip_all)]
    pub fn new(repository: Arc<dyn GameRepository>, code_source: Arc<dyn CodeSource>) -> Self {
        info!("Creating game engine");
        Self {
            repository,
            code_source,
            next_id: AtomicU64::new(0),
            game_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an engine backed by a fresh [`InMemoryGameRepository`].
    #[instrument(skip_all)]
    pub fn in_memory(code_source: Arc<dyn CodeSource>) -> Self {
        Self::new(Arc::new(InMemoryGameRepository::new()), code_source)
    }

    /// Creates a game and returns its initial view.
    ///
    /// # Errors
    ///
    /// - `InvalidRules` if a field lies outside its allowed range.
    /// - `MaxHintsTooLarge` if `max_hints >= code_length`.
    /// - `Internal` if the code source violates its contract or the
    ///   repository fails.
    #[instrument(skip(self), fields(code_length = rules.code_length(), max_hints = rules.max_hints()))]
    pub async fn create_game(&self, rules: Rules) -> Result<GameView, EngineError> {
        if let Err(err) = rules.check_bounds() {
            warn!(message = %err.message, "Rejected rules out of bounds");
            return Err(err);
        }
        if !rules.leaves_unrevealed_position() {
            warn!("Rejected rules: hint budget covers every position");
            return Err(EngineError::max_hints_too_large(
                rules.max_hints(),
                rules.code_length(),
            ));
        }

        let secret = self.code_source.generate_code(&rules).await;
        check_secret(&secret, &rules)?;

        let id = GameId::from(self.next_id.fetch_add(1, Ordering::SeqCst));
        let game = Game::new(id, rules, secret);
        let view = game.view();

        self.game_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_default();
        self.repository.save(game)?;

        info!(game_id = %id, "Game created");
        Ok(view)
    }

    /// Returns the current view of a game.
    ///
    /// # Errors
    ///
    /// `GameNotFound` if no game has this id.
    #[instrument(skip(self))]
    pub fn find_game(&self, id: GameId) -> Result<GameView, EngineError> {
        self.load(id).map(|game| game.view())
    }

    /// Validates, scores and records a guess, then advances the status.
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if no game has this id.
    /// - `GameCompleted` if the game is `Won` or `Lost`.
    /// - `InvalidGuess` if the guess breaks the game's rules.
    #[instrument(skip(self, guess))]
    pub fn submit_guess(&self, id: GameId, guess: &RawGuess) -> Result<GameView, EngineError> {
        let lock = self.game_lock(id)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut game = self.load(id)?;
        if game.status().is_terminal() {
            warn!(status = %game.status(), "Guess submitted to finished game");
            return Err(EngineError::game_completed());
        }

        let digits = validate(guess, game.rules())?;
        let result = score(game.secret_code(), &digits, game.rules().max_digit());
        game.record_guess(GuessRecord::new(digits, result));

        let status = next_status(game.rules(), game.attempts(), result);
        game.set_status(status);
        debug_assert!(game.attempts() <= game.rules().max_attempts());

        let view = game.view();
        self.repository.save(game)?;

        info!(
            attempts = view.attempts(),
            exact = result.exact_matches(),
            total = result.total_matches(),
            status = %status,
            "Guess scored"
        );
        Ok(view)
    }

    /// Reveals the next secret position.
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if no game has this id.
    /// - `GameCompleted` if the game is `Won` or `Lost`.
    /// - `OutOfHints` if the hint budget is used up.
    #[instrument(skip(self))]
    pub fn issue_hint(&self, id: GameId) -> Result<HintReveal, EngineError> {
        let lock = self.game_lock(id)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut game = self.load(id)?;
        if game.status().is_terminal() {
            warn!(status = %game.status(), "Hint requested for finished game");
            return Err(EngineError::game_completed());
        }
        if !game.can_use_hint() {
            debug!(hints_used = game.hints_used(), "Hint budget exhausted");
            return Err(EngineError::out_of_hints());
        }

        let reveal = reveal_next(&mut game)?;
        self.repository.save(game)?;
        Ok(reveal)
    }

    fn load(&self, id: GameId) -> Result<Game, EngineError> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| EngineError::game_not_found(id))
    }

    /// Returns the mutation lock for `id`, registering it for games this
    /// engine did not create itself.
    fn game_lock(&self, id: GameId) -> Result<Arc<Mutex<()>>, EngineError> {
        let mut locks = self
            .game_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(lock) = locks.get(&id) {
            return Ok(Arc::clone(lock));
        }

        if self.repository.find_by_id(id)?.is_none() {
            debug!(game_id = %id, "Game not found");
            return Err(EngineError::game_not_found(id));
        }

        Ok(Arc::clone(locks.entry(id).or_default()))
    }
}

fn check_secret(secret: &[crate::Digit], rules: &Rules) -> Result<(), EngineError> {
    if secret.len() != rules.code_length() as usize {
        error!(len = secret.len(), "Code source returned wrong length");
        return Err(EngineError::internal(format!(
            "code source returned {} digits, expected {}",
            secret.len(),
            rules.code_length()
        )));
    }
    if let Some(&digit) = secret.iter().find(|&&d| !rules.allows_digit(d)) {
        error!(digit, "Code source returned out-of-range digit");
        return Err(EngineError::internal(format!(
            "code source returned digit {} above {}",
            digit,
            rules.max_digit()
        )));
    }
    Ok(())
}
