//! Name Client: random pet names from a remote API or a local roster.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use reqwest::Client;
use tama_core::config::NamesConfig;
use tracing::{debug, warn};

use crate::error::NameError;
use crate::types::NameResolution;

/// Backend that supplies random names.
#[derive(Debug, Clone)]
pub enum NameProvider {
    /// The randomuser.me API (or anything returning the same JSON shape).
    RandomUser {
        /// Full endpoint URL.
        base_url: String,
    },
    /// Pick from a fixed list without touching the network.
    Roster(Vec<String>),
    /// No provider; every request fails and the caller falls back.
    None,
}

/// Fetches random names with retries and a per-request timeout.
pub struct NameClient {
    provider: NameProvider,
    http: Client,
    timeout: Duration,
    max_retries: u32,
}

impl NameClient {
    /// Create a new name client.
    #[must_use]
    pub fn new(provider: NameProvider, timeout: Duration, max_retries: u32) -> Self {
        Self {
            provider,
            http: Client::new(),
            timeout,
            max_retries,
        }
    }

    /// Build a client from the `[names]` config section.
    ///
    /// Unknown provider names fall back to [`NameProvider::None`].
    #[must_use]
    pub fn from_config(config: &NamesConfig) -> Self {
        let provider = match config.provider.as_str() {
            "randomuser" => NameProvider::RandomUser {
                base_url: config.base_url.clone(),
            },
            "roster" => NameProvider::Roster(config.roster.clone()),
            "none" => NameProvider::None,
            other => {
                warn!("Unknown name provider {other:?}; random names will use the fallback");
                NameProvider::None
            }
        };
        Self::new(
            provider,
            Duration::from_millis(config.request_timeout_ms),
            config.max_retries,
        )
    }

    /// Create a client with no provider (every request fails).
    #[must_use]
    pub fn none() -> Self {
        Self::new(NameProvider::None, Duration::ZERO, 0)
    }

    /// Check if the client has a provider configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self.provider, NameProvider::None)
    }

    /// Resolve a random name, never returning an error.
    pub async fn resolve(&self) -> NameResolution {
        NameResolution::from(self.fetch().await)
    }

    /// Fetch a random name.
    ///
    /// # Errors
    /// Returns `Err` if the provider is unavailable or every attempt fails.
    pub async fn fetch(&self) -> Result<String, NameError> {
        match &self.provider {
            NameProvider::None => Err(NameError::Unavailable("No name provider configured".into())),
            NameProvider::Roster(names) => pick_from_roster(names),
            NameProvider::RandomUser { base_url } => self.fetch_random_user(base_url).await,
        }
    }

    async fn fetch_random_user(&self, url: &str) -> Result<String, NameError> {
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!("Retrying name request (attempt {}/{})", attempt + 1, self.max_retries + 1);
            }

            let start = Instant::now();
            let result = self.http.get(url).timeout(self.timeout).send().await;
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            let err = match result {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp
                        .json()
                        .await
                        .map_err(|e| NameError::ParseError(e.to_string()))?;
                    let name = parse_random_user(&body)?;
                    debug!(%name, latency_ms, "Fetched random name");
                    return Ok(name);
                }
                Ok(resp) => NameError::RequestFailed(format!("HTTP {}", resp.status())),
                Err(e) if e.is_timeout() => NameError::Timeout(timeout_ms),
                Err(e) => NameError::from(e),
            };
            warn!(latency_ms, "Name request failed: {err}");
            last_error = Some(err);
        }

        let last_error =
            last_error.unwrap_or_else(|| NameError::Unavailable("no request sent".into()));
        Err(NameError::RetriesExhausted {
            attempts: self.max_retries + 1,
            last_error: Box::new(last_error),
        })
    }
}

fn pick_from_roster(names: &[String]) -> Result<String, NameError> {
    names
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| NameError::Unavailable("Name roster is empty".into()))
}

/// Extract `results[0].user.name.first` from a random-user API response.
///
/// # Errors
/// Returns `NameError::ParseError` if the path is missing or the name is blank.
pub fn parse_random_user(body: &serde_json::Value) -> Result<String, NameError> {
    let first = body["results"][0]["user"]["name"]["first"]
        .as_str()
        .ok_or_else(|| NameError::ParseError(format!("no results[0].user.name.first in {body}")))?;

    let first = first.trim();
    if first.is_empty() {
        return Err(NameError::ParseError("API returned a blank name".into()));
    }
    Ok(first.to_string())
}
