//! PubMed Paper Fetcher
//!
//! Searches PubMed through the NCBI E-utilities API, parses each matching
//! record, flags authors whose affiliations look industry-affiliated, and
//! exports the result as CSV or a text table.
//!
//! # Pipeline
//!
//! 1. **Search**: ESearch returns up to `max_results` identifiers
//! 2. **Fetch**: EFetch returns one XML document per identifier
//! 3. **Parse**: the first `PubmedArticle` becomes a [`models::PaperRecord`]
//! 4. **Classify**: affiliations are matched against company keywords
//! 5. **Export**: CSV file or table on stdout
//!
//! # Example
//!
//! ```no_run
//! use pubmed_papers::{AffiliationClassifier, Config, PaperFetcher, PubMedClient, export};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?.with_max_results(50);
//!     let client = PubMedClient::new(config)?;
//!     let fetcher = PaperFetcher::new(client, AffiliationClassifier::default());
//!
//!     let papers = fetcher.fetch_papers("cancer immunotherapy", None).await?;
//!     export::export(&papers, None)?;
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod parser;
pub mod pipeline;

pub use classifier::AffiliationClassifier;
pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, Error, ExportError, ParseError};
pub use pipeline::PaperFetcher;
