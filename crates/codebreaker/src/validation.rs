//! Guess validation.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Digit, EngineError, Rules};

/// A guess as received from a client, before validation.
///
/// The outer `Option` models a missing guess and the inner ones model null
/// digits, so every malformed shape a JSON client can send is representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawGuess(Option<Vec<Option<i64>>>);

impl RawGuess {
    /// A guess that was not supplied at all.
    pub fn absent() -> Self {
        Self(None)
    }

    /// Wraps possibly-null digits.
    pub fn from_optional(digits: Vec<Option<i64>>) -> Self {
        Self(Some(digits))
    }

    /// Returns the raw digits, if any were supplied.
    pub fn digits(&self) -> Option<&[Option<i64>]> {
        self.0.as_deref()
    }
}

impl From<Vec<i64>> for RawGuess {
    fn from(digits: Vec<i64>) -> Self {
        Self(Some(digits.into_iter().map(Some).collect()))
    }
}

impl From<&[i64]> for RawGuess {
    fn from(digits: &[i64]) -> Self {
        digits.to_vec().into()
    }
}

/// Checks `guess` against `rules` and returns its digits.
///
/// Checks run in a fixed order and the first violation is reported: missing
/// guess, wrong length, then each element in turn for null, too large, and
/// negative.
///
/// # Errors
///
/// Returns an `InvalidGuess` [`EngineError`] describing the violation.
#[instrument(skip(guess), fields(code_length = rules.code_length()))]
pub fn validate(guess: &RawGuess, rules: &Rules) -> Result<Vec<Digit>, EngineError> {
    let Some(raw) = guess.digits() else {
        debug!("Guess missing");
        return Err(EngineError::invalid_guess("guess cannot be empty"));
    };

    let expected = rules.code_length() as usize;
    if raw.len() != expected {
        debug!(expected, received = raw.len(), "Guess length mismatch");
        return Err(EngineError::invalid_guess(format!(
            "guess length mismatch: expected {} digits but received {}",
            expected,
            raw.len()
        )));
    }

    let max_digit = i64::from(rules.max_digit());
    raw.iter()
        .map(|digit| match *digit {
            None => Err(EngineError::invalid_guess("guess contains a null digit")),
            Some(d) if d > max_digit => Err(EngineError::invalid_guess(format!(
                "digits cannot be greater than {}",
                max_digit
            ))),
            Some(d) if d < 0 => Err(EngineError::invalid_guess("digits cannot be negative")),
            // Bounded rules keep every accepted value inside Digit.
            Some(d) => Digit::try_from(d).map_err(|_| {
                EngineError::internal(format!("digit {} does not fit the digit type", d))
            }),
        })
        .collect()
}
