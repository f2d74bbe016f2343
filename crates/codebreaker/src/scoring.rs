//! Duplicate-aware feedback scoring.
//!
//! Exact matches are counted first. Only the positions that did not match
//! exactly then feed two per-digit frequency tables, and the overlap of those
//! tables gives the misplaced count. Repeated digits in either sequence are
//! therefore never counted more often than they actually overlap.

use tracing::{instrument, trace};

use crate::{Digit, GuessResult};

/// Scores `guess` against `secret`.
///
/// Both sequences must have the same length and every digit must be at most
/// `max_digit`; the validator guarantees this for guesses and the engine
/// checks it for secrets.
#[instrument(level = "trace", skip(secret, guess))]
pub fn score(secret: &[Digit], guess: &[Digit], max_digit: u32) -> GuessResult {
    let table_len = max_digit as usize + 1;
    let mut secret_freq = vec![0u32; table_len];
    let mut guess_freq = vec![0u32; table_len];
    let mut exact = 0u32;

    for (&s, &g) in secret.iter().zip(guess) {
        if s == g {
            exact += 1;
        } else {
            secret_freq[usize::from(s)] += 1;
            guess_freq[usize::from(g)] += 1;
        }
    }

    let misplaced: u32 = secret_freq
        .iter()
        .zip(&guess_freq)
        .map(|(&s, &g)| s.min(g))
        .sum();

    trace!(exact, misplaced, "Scored guess");
    GuessResult::new(exact, exact + misplaced)
}
