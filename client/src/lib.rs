//! Async PokeAPI client.
//!
//! [`PokeClient`] is the network-backed [`RosterProvider`]: it fetches the
//! paginated species list, then the per-species records, and turns them into
//! [`Creature`]s. Transient failures are retried per [`RetryPolicy`].

mod config;

use anyhow::{Context, Result};
use futures_util::{StreamExt, TryStreamExt, stream};
use teamdex_roster::{
    Creature, PokemonListResponse, RosterError, RosterProvider, TypeInfo, id_from_url,
    parse_pokemon, parse_pokemon_list, parse_type_info,
};
use thiserror::Error;

pub use config::{ClientConfig, POKEAPI_URL, RetryPolicy};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Client errors are final; server errors, rate limiting and transport
    /// failures may succeed on a later attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            FetchError::Request { .. } => true,
        }
    }
}

/// PokeAPI client
pub struct PokeClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PokeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("teamdex/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page of the species list
    pub async fn fetch_pokemon_list(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<PokemonListResponse> {
        let body = self
            .get(&format!("pokemon?limit={limit}&offset={offset}"))
            .await?;
        parse_pokemon_list(&body).context("Failed to parse pokemon list")
    }

    /// Fetch a single species by name or national dex number
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Creature> {
        let endpoint = format!("pokemon/{}", name_or_id.trim().to_lowercase());
        let body = self.get(&endpoint).await?;
        let pokemon =
            parse_pokemon(&body).with_context(|| format!("Failed to parse {endpoint}"))?;
        Ok(Creature::try_from(pokemon)?)
    }

    /// Fetch the damage relations of one type
    pub async fn fetch_type(&self, name_or_id: &str) -> Result<TypeInfo> {
        let endpoint = format!("type/{}", name_or_id.trim().to_lowercase());
        let body = self.get(&endpoint).await?;
        parse_type_info(&body).with_context(|| format!("Failed to parse {endpoint}"))
    }

    /// Fetch several species concurrently, preserving the order of `ids`
    pub async fn fetch_many(&self, ids: &[u32]) -> Result<Vec<Creature>> {
        stream::iter(ids.iter().copied())
            .map(|id| async move { self.fetch_pokemon(&id.to_string()).await })
            .buffered(self.config.concurrency.max(1))
            .try_collect()
            .await
    }

    /// GET `endpoint` relative to the base URL, retrying transient failures
    async fn get(&self, endpoint: &str) -> Result<String> {
        let url = self.config.url(endpoint);
        let policy = &self.config.retry;
        let mut attempt = 1;

        loop {
            tracing::debug!(url = %url, attempt, "GET");

            let error = match self.try_get(&url).await {
                Ok(body) => return Ok(body),
                Err(e) => e,
            };

            if !error.is_retryable() || !policy.allows(attempt + 1) {
                return Err(error)
                    .with_context(|| format!("Giving up on {url} after {attempt} attempt(s)"));
            }

            let delay = policy.delay_after(attempt);
            tracing::warn!(
                attempt = attempt,
                max_attempts = ?policy.max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Request failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn try_get(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(request_error)
    }
}

impl RosterProvider for PokeClient {
    async fn fetch_roster(&self, limit: usize) -> Result<Vec<Creature>> {
        let list = self.fetch_pokemon_list(limit, 0).await?;
        let ids = list
            .results
            .iter()
            .map(|entry| {
                id_from_url(&entry.url)
                    .ok_or_else(|| RosterError::MissingField(format!("id in {}", entry.url)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = ids.len(), "Fetching roster details");
        self.fetch_many(&ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_retryability() {
        let status = |code: u16| FetchError::Status {
            url: "http://localhost/pokemon/1".to_string(),
            status: reqwest::StatusCode::from_u16(code).unwrap(),
        };
        assert!(!status(404).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(status(429).is_retryable());
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
    }

    #[test]
    fn test_status_message() {
        let err = FetchError::Status {
            url: "http://localhost/pokemon/9999".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost/pokemon/9999 returned 404 Not Found"
        );
    }
}
