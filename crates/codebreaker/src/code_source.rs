//! Secret code sources.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tracing::{debug, instrument};

use crate::{Digit, Rules};

/// Produces secret codes for new games.
///
/// Implementations must always return `code_length` digits in
/// `0..=max_digit`. Sources that depend on remote services handle their own
/// failures, typically by falling back to [`LocalCodeSource`].
#[async_trait]
pub trait CodeSource: Send + Sync {
    /// Generates a secret code for `rules`.
    async fn generate_code(&self, rules: &Rules) -> Vec<Digit>;
}

/// Pseudo-random digits generated in-process.
#[derive(Debug, Default)]
pub struct LocalCodeSource {
    seeded: Option<Mutex<StdRng>>,
}

impl LocalCodeSource {
    /// Creates a source backed by the thread-local generator.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deterministic source; equal seeds yield equal code sequences.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Generates a code synchronously.
    #[instrument(skip(self))]
    pub fn generate(&self, rules: &Rules) -> Vec<Digit> {
        let len = rules.code_length() as usize;
        // max_digit is at most 9 for any rules that pass bounds checks
        let max = Digit::try_from(rules.max_digit()).unwrap_or(Digit::MAX);

        let code = match &self.seeded {
            Some(rng) => match rng.lock() {
                Ok(mut rng) => draw(&mut *rng, len, max),
                Err(poisoned) => draw(&mut *poisoned.into_inner(), len, max),
            },
            None => draw(&mut rand::rng(), len, max),
        };

        debug!(len, "Generated local code");
        code
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, len: usize, max: Digit) -> Vec<Digit> {
    (0..len).map(|_| rng.random_range(0..=max)).collect()
}

#[async_trait]
impl CodeSource for LocalCodeSource {
    async fn generate_code(&self, rules: &Rules) -> Vec<Digit> {
        self.generate(rules)
    }
}
