//! NCBI E-utilities client.
//!
//! Provides async HTTP client with:
//! - ESearch identifier search (JSON)
//! - EFetch full-record retrieval (XML)
//! - Optional retry middleware with exponential backoff
//! - Optional fixed delay before every request

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::{debug, warn};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::ESearchResponse;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// PubMed E-utilities client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API key (optional).
    api_key: Option<String>,

    /// Contact email (optional).
    email: Option<String>,

    /// Tool name.
    tool: String,

    /// ESearch URL.
    esearch_url: String,

    /// EFetch URL.
    efetch_url: String,

    /// Delay before each request.
    request_delay: Duration,

    /// Identifiers requested when a search names no limit.
    max_results: u32,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
                .build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            client: builder.build(),
            api_key: config.api_key,
            email: config.email,
            tool: config.tool,
            esearch_url: config.esearch_url,
            efetch_url: config.efetch_url,
            request_delay: config.request_delay,
            max_results: config.max_results,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Identifiers requested when a search names no limit.
    #[must_use]
    pub const fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Search PubMed and return matching identifiers in server order.
    ///
    /// An empty list means zero matches and is not an error. `None` requests
    /// the configured `max_results`.
    ///
    /// # Errors
    ///
    /// Returns error on non-success status, malformed JSON, or a query error
    /// reported inside the payload.
    pub async fn search(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> ClientResult<Vec<String>> {
        let max_results = max_results.unwrap_or(self.max_results);
        let params = self.params(vec![
            ("db", api::DATABASE.to_string()),
            ("term", query.to_string()),
            ("retmax", max_results.to_string()),
            ("retmode", "json".to_string()),
        ]);

        let response = self.get(&self.esearch_url, &params).await?;
        let body = response.text().await?;
        let payload: ESearchResponse = serde_json::from_str(&body)?;
        let result = payload.esearchresult;

        if let Some(message) = result.error {
            warn!(query, error = %message, "ESearch reported a query error");
            return Err(ClientError::bad_request(message));
        }

        debug!(query, total = ?result.total(), returned = result.idlist.len(), "ESearch complete");
        Ok(result.idlist)
    }

    /// Fetch the raw EFetch XML document for one identifier.
    ///
    /// # Errors
    ///
    /// Returns error on non-success status.
    pub async fn fetch_details(&self, pmid: &str) -> ClientResult<String> {
        let params = self.params(vec![
            ("db", api::DATABASE.to_string()),
            ("id", pmid.to_string()),
            ("retmode", "xml".to_string()),
        ]);

        let response = self.get(&self.efetch_url, &params).await?;
        let body = response.text().await?;
        debug!(pmid, bytes = body.len(), "EFetch complete");
        Ok(body)
    }

    /// Append the NCBI identification parameters that are configured.
    fn params(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        params.push(("tool", self.tool.clone()));
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Make a GET request.
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> ClientResult<reqwest::Response> {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        debug!(url, "GET");
        let response = self.client.get(url).query(params).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("has_api_key", &self.has_api_key())
            .field("esearch_url", &self.esearch_url)
            .field("efetch_url", &self.efetch_url)
            .field("max_results", &self.max_results)
            .finish()
    }
}
