//! Error types for the PubMed paper fetcher.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by NCBI (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request (400 response, or an ESearch `ERROR` payload)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is worth retrying.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from parsing an EFetch XML document.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// No `PubmedArticle` element in the document
    #[error("No PubmedArticle element in document")]
    NoArticle,

    /// A required element is absent from the article
    #[error("Missing required element <{0}>")]
    MissingElement(&'static str),

    /// The document ended while an element was still open
    #[error("Document truncated inside <{0}>")]
    UnexpectedEof(&'static str),
}

/// Errors from writing the result table.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// CSV serialization or file creation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output stream error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level errors for a fetch-and-export run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Error parsing a fetched record
    #[error("Parse error for PMID {pmid}: {source}")]
    Parse {
        /// Identifier whose document failed to parse
        pmid: String,
        /// Underlying parse error
        source: ParseError,
    },

    /// Error exporting results
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Input validation failed
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

impl Error {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Wrap a parse error with the identifier it was fetched for.
    #[must_use]
    pub fn parse(pmid: impl Into<String>, source: ParseError) -> Self {
        Self::Parse { pmid: pmid.into(), source }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Result type alias for parser operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
