//! ESearch JSON payload.

use serde::Deserialize;

/// Top-level ESearch response (`retmode=json`).
#[derive(Debug, Clone, Deserialize)]
pub struct ESearchResponse {
    /// Search result block.
    pub esearchresult: ESearchResult,
}

/// The `esearchresult` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ESearchResult {
    /// Total number of matches (as a decimal string).
    #[serde(default)]
    pub count: Option<String>,

    /// Identifiers in relevance order, capped at `retmax`.
    pub idlist: Vec<String>,

    /// Query error reported with a 200 status.
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
}

impl ESearchResult {
    /// Total match count, if the server reported a parseable one.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.count.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_payload() {
        let json = r#"{"header":{"type":"esearch"},"esearchresult":{"count":"2","retmax":"2","idlist":["111","222"]}}"#;
        let resp: ESearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.esearchresult.idlist, vec!["111", "222"]);
        assert_eq!(resp.esearchresult.total(), Some(2));
        assert!(resp.esearchresult.error.is_none());
    }

    #[test]
    fn test_missing_idlist_is_an_error() {
        let json = r#"{"esearchresult":{"count":"0"}}"#;
        assert!(serde_json::from_str::<ESearchResponse>(json).is_err());
    }
}
