//! Flat per-article record written by the exporter.

use serde::{Deserialize, Serialize};

/// Placeholder for fields absent from the source document.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column headers, in export order.
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One exported row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed identifier.
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Article title, or "N/A".
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication year, or "N/A".
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Comma-separated last names of industry-affiliated authors.
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Comma-separated industry affiliations.
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    /// First author email found in the record, or "N/A".
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl PaperRecord {
    /// Field values in column order.
    #[must_use]
    pub fn values(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_email.as_str(),
        ]
    }
}
