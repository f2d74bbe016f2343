//! Secret codes from the random.org integer API.

use async_trait::async_trait;
use codebreaker::{CodeSource, Digit, LocalCodeSource, Rules};
use derive_more::{Display, Error};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Why a random.org request could not be used.
#[derive(Debug, Clone, Display, Error)]
#[display("random.org request failed: {}", message)]
pub struct RandomOrgError {
    /// Error message.
    pub message: String,
}

impl RandomOrgError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Code source that asks random.org and falls back to local digits on any
/// failure or timeout.
#[derive(Debug)]
pub struct RandomOrgCodeSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    fallback: LocalCodeSource,
}

impl RandomOrgCodeSource {
    /// Creates a source for the API at `base_url`.
    #[instrument(skip(base_url), fields(base_url = %base_url))]
    pub fn new(base_url: String, timeout: Duration) -> Self {
        info!("Creating random.org code source");
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            fallback: LocalCodeSource::new(),
        }
    }

    /// Replaces the fallback generator.
    pub fn with_fallback(mut self, fallback: LocalCodeSource) -> Self {
        self.fallback = fallback;
        self
    }

    /// Requests a code without falling back.
    ///
    /// # Errors
    ///
    /// Returns [`RandomOrgError`] on timeout, transport failure, non-success
    /// status, or a body that does not hold a valid code.
    #[instrument(skip(self), fields(code_length = rules.code_length()))]
    pub async fn fetch(&self, rules: &Rules) -> Result<Vec<Digit>, RandomOrgError> {
        let url = format!(
            "{}/integers/?num={}&min=0&max={}&col=1&base=10&format=plain&rnd=new",
            self.base_url,
            rules.code_length(),
            rules.max_digit()
        );
        debug!(%url, "Requesting code");

        let request = async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| RandomOrgError::new(format!("transport: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RandomOrgError::new(format!("status {}", status)));
            }

            response
                .text()
                .await
                .map_err(|e| RandomOrgError::new(format!("body: {}", e)))
        };

        let body = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| RandomOrgError::new(format!("timed out after {:?}", self.timeout)))??;

        parse_code(&body, rules)
    }
}

/// Parses one integer per line and checks it against `rules`.
///
/// # Errors
///
/// Returns [`RandomOrgError`] for non-numeric lines, the wrong number of
/// digits, or digits outside `0..=max_digit`.
#[instrument(skip(body))]
pub fn parse_code(body: &str, rules: &Rules) -> Result<Vec<Digit>, RandomOrgError> {
    let code = body
        .trim()
        .lines()
        .map(|line| {
            line.trim()
                .parse::<Digit>()
                .map_err(|e| RandomOrgError::new(format!("bad line '{}': {}", line, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if code.len() != rules.code_length() as usize {
        return Err(RandomOrgError::new(format!(
            "expected {} digits, got {}",
            rules.code_length(),
            code.len()
        )));
    }
    if let Some(digit) = code.iter().find(|&&d| !rules.allows_digit(d)) {
        return Err(RandomOrgError::new(format!("digit {} out of range", digit)));
    }

    Ok(code)
}

#[async_trait]
impl CodeSource for RandomOrgCodeSource {
    async fn generate_code(&self, rules: &Rules) -> Vec<Digit> {
        match self.fetch(rules).await {
            Ok(code) => {
                debug!("Using random.org code");
                code
            }
            Err(e) => {
                warn!(error = %e, "random.org unavailable, using local generator");
                self.fallback.generate(rules)
            }
        }
    }
}
