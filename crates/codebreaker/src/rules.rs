//! Game rules: code shape, attempt budget and hint budget.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::instrument;

use crate::EngineError;

/// A single digit of a secret code or guess.
pub type Digit = u8;

/// Allowed range for [`Rules::code_length`].
pub const CODE_LENGTH_RANGE: RangeInclusive<u32> = 4..=10;

/// Allowed range for [`Rules::max_digit`].
pub const MAX_DIGIT_RANGE: RangeInclusive<u32> = 1..=9;

/// Allowed range for [`Rules::max_attempts`].
pub const MAX_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=20;

/// Immutable configuration of a single game.
///
/// Valid digits are `0..=max_digit`. The engine additionally requires
/// `max_hints < code_length` when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    /// Number of digits in the secret code.
    #[getter(copy)]
    code_length: u32,
    /// Largest digit value that may appear in the code.
    #[getter(copy)]
    max_digit: u32,
    /// Number of guesses allowed before the game is lost.
    #[getter(copy)]
    max_attempts: u32,
    /// Number of hints the player may request.
    #[getter(copy)]
    max_hints: u32,
}

impl Rules {
    /// Creates a new set of rules.
    ///
    /// Bounds are not enforced here; the engine runs
    /// [`Rules::check_bounds`] before creating a game.
    #[instrument]
    pub fn new(code_length: u32, max_digit: u32, max_attempts: u32, max_hints: u32) -> Self {
        Self {
            code_length,
            max_digit,
            max_attempts,
            max_hints,
        }
    }

    /// Reports the first field outside its allowed range.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidRules` [`EngineError`] naming the offending field.
    #[track_caller]
    pub fn check_bounds(&self) -> Result<(), EngineError> {
        let fields = [
            ("codeLength", self.code_length, CODE_LENGTH_RANGE),
            ("maxDigit", self.max_digit, MAX_DIGIT_RANGE),
            ("maxAttempts", self.max_attempts, MAX_ATTEMPTS_RANGE),
        ];

        for (name, value, range) in fields {
            if !range.contains(&value) {
                return Err(EngineError::invalid_rules(format!(
                    "{} must be between {} and {}, got {}",
                    name,
                    range.start(),
                    range.end(),
                    value
                )));
            }
        }

        Ok(())
    }

    /// Returns `true` if at least one position stays hidden after all hints.
    pub fn leaves_unrevealed_position(&self) -> bool {
        self.max_hints < self.code_length
    }

    /// Returns `true` if `digit` may appear in a code under these rules.
    pub fn allows_digit(&self, digit: Digit) -> bool {
        u32::from(digit) <= self.max_digit
    }
}
