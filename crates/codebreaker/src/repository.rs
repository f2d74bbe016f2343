//! Game storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, instrument};

use crate::{Game, GameId, RepositoryError};

/// Key-value store for games.
///
/// Each call is atomic on its own, and a `save` must be visible to every
/// later `find_by_id`. Nothing is promised across a find/save pair; the
/// engine serializes those per game itself.
pub trait GameRepository: Send + Sync {
    /// Stores `game`, replacing any previous value with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the store cannot be written.
    fn save(&self, game: Game) -> Result<(), RepositoryError>;

    /// Loads the game stored under `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the store cannot be read.
    fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError>;
}

/// Process-lifetime repository backed by a shared map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl InMemoryGameRepository {
    /// Creates an empty repository.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating in-memory game repository");
        Self::default()
    }

    /// Number of stored games.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the lock is poisoned.
    #[instrument(skip(self))]
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let games = self
            .games
            .read()
            .map_err(|e| RepositoryError::new(format!("Game store poisoned: {}", e)))?;
        Ok(games.len())
    }
}

impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game), fields(game_id = %game.id(), status = %game.status()))]
    fn save(&self, game: Game) -> Result<(), RepositoryError> {
        let mut games = self
            .games
            .write()
            .map_err(|e| RepositoryError::new(format!("Game store poisoned: {}", e)))?;
        games.insert(game.id(), game);
        debug!("Game saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        let games = self
            .games
            .read()
            .map_err(|e| RepositoryError::new(format!("Game store poisoned: {}", e)))?;
        let game = games.get(&id).cloned();

        if game.is_none() {
            debug!(game_id = %id, "Game not found");
        }

        Ok(game)
    }
}
