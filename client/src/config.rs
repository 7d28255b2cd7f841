use std::time::Duration;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Backoff applied between attempts of a failed request
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts including the first one; `None` retries forever
    pub max_attempts: Option<usize>,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Some(3),
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Never retry
    pub fn none() -> Self {
        Self {
            max_attempts: Some(1),
            ..Self::default()
        }
    }

    /// Delay to wait after the given failed attempt (1-based)
    pub fn delay_after(&self, attempt: usize) -> Duration {
        let mut delay = self.initial_delay.min(self.max_delay);
        for _ in 1..attempt {
            let next = Duration::try_from_secs_f64(delay.as_secs_f64() * self.backoff_multiplier)
                .unwrap_or(self.max_delay)
                .min(self.max_delay);
            // stops at the cap, or when the multiplier no longer grows the delay
            if next <= delay {
                break;
            }
            delay = next;
        }
        delay
    }

    pub fn allows(&self, attempt: usize) -> bool {
        self.max_attempts.is_none_or(|max| attempt <= max)
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Detail requests in flight at once when loading a roster
    pub concurrency: usize,

    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            timeout: Duration::from_secs(10),
            concurrency: 16,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_grows_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_millis(500));
        assert_eq!(policy.delay_after(2), Duration::from_secs(1));
        assert_eq!(policy.delay_after(3), Duration::from_secs(2));
        assert_eq!(policy.delay_after(10), Duration::from_secs(5));
    }

    #[test]
    fn test_unbounded_retries_stay_capped() {
        let forever = RetryPolicy {
            max_attempts: None,
            ..RetryPolicy::default()
        };
        assert_eq!(forever.delay_after(100), Duration::from_secs(5));
        assert_eq!(forever.delay_after(usize::MAX), Duration::from_secs(5));

        let steep = RetryPolicy {
            backoff_multiplier: f64::MAX,
            ..forever
        };
        assert_eq!(steep.delay_after(2), Duration::from_secs(5));

        let flat = RetryPolicy {
            backoff_multiplier: 1.0,
            ..steep
        };
        assert_eq!(flat.delay_after(usize::MAX), Duration::from_millis(500));
    }

    #[test]
    fn test_allows() {
        let policy = RetryPolicy::default();
        assert!(policy.allows(3));
        assert!(!policy.allows(4));
        assert!(!RetryPolicy::none().allows(2));

        let forever = RetryPolicy {
            max_attempts: None,
            ..RetryPolicy::default()
        };
        assert!(forever.allows(1_000));
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::with_base_url("http://localhost:8080/api/v2/");
        assert_eq!(
            config.url("/pokemon/25"),
            "http://localhost:8080/api/v2/pokemon/25"
        );
        assert_eq!(
            ClientConfig::default().url("type/fire"),
            "https://pokeapi.co/api/v2/type/fire"
        );
    }
}
