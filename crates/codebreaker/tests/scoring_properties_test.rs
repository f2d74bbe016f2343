//! Property tests for feedback scoring.

use codebreaker::{Digit, score};
use proptest::prelude::*;

/// A max digit and two equal-length codes drawn from `0..=max_digit`.
fn secret_and_guess() -> impl Strategy<Value = (u32, Vec<Digit>, Vec<Digit>)> {
    (1u32..=9, 4usize..=10).prop_flat_map(|(max_digit, len)| {
        let digit = 0..=max_digit as Digit;
        (
            Just(max_digit),
            prop::collection::vec(digit.clone(), len),
            prop::collection::vec(digit, len),
        )
    })
}

proptest! {
    #[test]
    fn matches_are_bounded((max_digit, secret, guess) in secret_and_guess()) {
        let result = score(&secret, &guess, max_digit);
        prop_assert!(result.exact_matches() <= result.total_matches());
        prop_assert!(result.total_matches() as usize <= secret.len());
    }

    #[test]
    fn full_match_iff_equal((max_digit, secret, guess) in secret_and_guess()) {
        let result = score(&secret, &guess, max_digit);
        let len = secret.len() as u32;
        let full = result.exact_matches() == len && result.total_matches() == len;
        prop_assert_eq!(full, secret == guess);
    }

    #[test]
    fn identical_codes_match_fully((max_digit, secret, _guess) in secret_and_guess()) {
        let result = score(&secret, &secret, max_digit);
        prop_assert_eq!(result.exact_matches() as usize, secret.len());
        prop_assert_eq!(result.total_matches() as usize, secret.len());
    }

    #[test]
    fn scoring_is_symmetric((max_digit, secret, guess) in secret_and_guess()) {
        prop_assert_eq!(score(&secret, &guess, max_digit), score(&guess, &secret, max_digit));
    }

    #[test]
    fn total_ignores_order((max_digit, secret, guess) in secret_and_guess()) {
        let mut reversed = guess.clone();
        reversed.reverse();
        prop_assert_eq!(
            score(&secret, &guess, max_digit).total_matches(),
            score(&secret, &reversed, max_digit).total_matches()
        );
    }
}
