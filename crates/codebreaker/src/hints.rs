//! Hint issuance.

use tracing::{error, info, instrument};

use crate::{EngineError, Game, HintReveal};

/// Reveals the lowest secret position not yet hinted.
///
/// The caller is responsible for checking that the game is in progress and
/// that hint budget remains.
///
/// # Errors
///
/// Returns an `Internal` [`EngineError`] if every position is already
/// revealed, which can only happen if a game was created with
/// `max_hints >= code_length`.
#[instrument(skip(game), fields(game_id = %game.id(), hints_used = game.hints_used()))]
pub(crate) fn reveal_next(game: &mut Game) -> Result<HintReveal, EngineError> {
    let next = game
        .secret_code()
        .iter()
        .enumerate()
        .find(|(location, _)| !game.hints().is_revealed(*location))
        .map(|(location, &digit)| HintReveal::new(location, digit));

    let Some(reveal) = next else {
        error!("No unrevealed position left for hint");
        return Err(EngineError::internal(format!(
            "game {} has no unrevealed position left",
            game.id()
        )));
    };

    if !game.record_hint(reveal) {
        return Err(EngineError::internal(format!(
            "position {} of game {} was revealed twice",
            reveal.location(),
            game.id()
        )));
    }

    info!(location = reveal.location(), "Hint revealed");
    Ok(reveal)
}
