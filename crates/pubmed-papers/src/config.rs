//! Configuration for the PubMed paper fetcher.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// ESearch endpoint (identifier search).
    pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

    /// EFetch endpoint (full record retrieval).
    pub const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

    /// Entrez database queried by every request.
    pub const DATABASE: &str = "pubmed";

    /// Default number of identifiers requested from ESearch.
    pub const DEFAULT_MAX_RESULTS: u32 = 20;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Tool name reported to NCBI alongside requests.
    pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
}

/// Run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional, raises the E-utilities rate limit).
    pub api_key: Option<String>,

    /// Contact email reported to NCBI (optional).
    pub email: Option<String>,

    /// Tool name reported to NCBI.
    pub tool: String,

    /// ESearch URL (overridable for mock servers).
    pub esearch_url: String,

    /// EFetch URL (overridable for mock servers).
    pub efetch_url: String,

    /// Number of identifiers requested per search.
    pub max_results: u32,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay slept before every request. Zero disables rate limiting.
    pub request_delay: Duration,

    /// Retries for transient failures. Zero disables retrying.
    pub max_retries: u32,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            email: None,
            tool: api::TOOL_NAME.to_string(),
            esearch_url: api::ESEARCH_URL.to_string(),
            efetch_url: api::EFETCH_URL.to_string(),
            max_results: api::DEFAULT_MAX_RESULTS,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            request_delay: Duration::ZERO,
            max_retries: 0,
        }
    }

    /// Create a test configuration pointing both endpoints at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            esearch_url: format!("{base_url}/esearch.fcgi"),
            efetch_url: format!("{base_url}/efetch.fcgi"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new(None)
        }
    }

    /// Create configuration from environment variables (and a `.env` file if present).
    ///
    /// Reads `NCBI_API_KEY` and `NCBI_EMAIL`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("NCBI_API_KEY").ok().filter(|k| !k.trim().is_empty());
        let email = std::env::var("NCBI_EMAIL").ok().filter(|e| !e.trim().is_empty());
        Ok(Self::new(api_key).with_email(email))
    }

    /// Set the contact email.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Set the number of identifiers requested per search.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the delay slept before every request.
    #[must_use]
    pub const fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Set the number of retries for transient failures.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.max_results, 20);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(config.esearch_url, api::ESEARCH_URL);
    }

    #[test]
    fn test_config_for_testing_rewrites_endpoints() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.esearch_url, "http://127.0.0.1:9999/esearch.fcgi");
        assert_eq!(config.efetch_url, "http://127.0.0.1:9999/efetch.fcgi");
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new(Some("key".to_string()))
            .with_email(Some("me@example.org".to_string()))
            .with_max_results(5)
            .with_max_retries(2)
            .with_request_delay(Duration::from_millis(340));
        assert!(config.has_api_key());
        assert_eq!(config.email.as_deref(), Some("me@example.org"));
        assert_eq!(config.max_results, 5);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.request_delay, Duration::from_millis(340));
    }
}
