//! Search, fetch, parse and classify, one identifier at a time.

use tracing::{debug, info};

use crate::classifier::AffiliationClassifier;
use crate::client::PubMedClient;
use crate::error::{Error, Result};
use crate::models::PaperRecord;
use crate::parser::parse_record;

/// Upper bound ESearch accepts for `retmax`.
pub const MAX_RETMAX: u32 = 10_000;

/// Runs a query end to end and collects one record per identifier.
#[derive(Debug, Clone)]
pub struct PaperFetcher {
    client: PubMedClient,
    classifier: AffiliationClassifier,
}

impl PaperFetcher {
    /// Create a fetcher from a client and classifier.
    #[must_use]
    pub fn new(client: PubMedClient, classifier: AffiliationClassifier) -> Self {
        Self { client, classifier }
    }

    /// Search for `query` and fetch every matching record, in search order.
    ///
    /// Requests are sent one after another; the first failure aborts the run.
    /// `None` uses the client's configured `max_results`.
    pub async fn fetch_papers(
        &self,
        query: &str,
        max_results: Option<u32>,
    ) -> Result<Vec<PaperRecord>> {
        let max_results = max_results.unwrap_or_else(|| self.client.max_results());
        validate(query, max_results)?;

        let ids = self.client.search(query, Some(max_results)).await?;
        info!(query, count = ids.len(), "Search returned identifiers");

        let mut papers = Vec::with_capacity(ids.len());
        for pmid in &ids {
            papers.push(self.fetch_paper_details(pmid).await?);
        }
        Ok(papers)
    }

    /// Fetch, parse and classify a single record.
    pub async fn fetch_paper_details(&self, pmid: &str) -> Result<PaperRecord> {
        let xml = self.client.fetch_details(pmid).await?;
        let record = parse_record(&xml, &self.classifier).map_err(|e| Error::parse(pmid, e))?;
        debug!(
            pmid,
            non_academic = %record.non_academic_authors,
            companies = %record.company_affiliations,
            "Classified record"
        );
        Ok(record)
    }
}

fn validate(query: &str, max_results: u32) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::validation("query", "cannot be empty"));
    }
    if !(1..=MAX_RETMAX).contains(&max_results) {
        return Err(Error::validation(
            "max_results",
            format!("must be between 1 and {MAX_RETMAX}, got {max_results}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_query() {
        assert!(matches!(validate("   ", 20), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_validate_bounds_max_results() {
        assert!(validate("cancer", 0).is_err());
        assert!(validate("cancer", MAX_RETMAX + 1).is_err());
        assert!(validate("cancer", 1).is_ok());
        assert!(validate("cancer", MAX_RETMAX).is_ok());
    }
}
