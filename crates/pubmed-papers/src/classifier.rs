//! Industry affiliation classifier.
//!
//! An affiliation counts as a company affiliation when its lowercase form
//! contains any configured keyword.

use crate::models::Author;

/// Default company keywords.
pub const DEFAULT_KEYWORDS: &[&str] =
    &["pharma", "biotech", "inc", "ltd", "laboratories", "corporation"];

/// Separator used when joining names and affiliations.
const JOIN_SEPARATOR: &str = ", ";

/// Result of classifying one article's authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Authors with at least one company affiliation.
    pub non_academic_authors: Vec<String>,

    /// Company affiliations, in scan order.
    pub companies: Vec<String>,
}

impl Classification {
    /// Both lists joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> (String, String) {
        (self.non_academic_authors.join(JOIN_SEPARATOR), self.companies.join(JOIN_SEPARATOR))
    }
}

/// Keyword-based affiliation classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationClassifier {
    keywords: Vec<String>,
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl AffiliationClassifier {
    /// Create a classifier from a keyword set. Keywords are lowercased and
    /// blank ones dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// The normalized keyword set.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether an affiliation string looks industry-affiliated.
    #[must_use]
    pub fn is_company(&self, affiliation: &str) -> bool {
        let lower = affiliation.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Classify parallel author/affiliation lists, pairing `authors[i]` with
    /// `affiliations[i]`.
    ///
    /// A matching affiliation with no author at its index is still listed
    /// under companies. Returns the two joined strings.
    #[must_use]
    pub fn classify(&self, authors: &[String], affiliations: &[String]) -> (String, String) {
        let mut result = Classification::default();

        for (idx, affiliation) in affiliations.iter().enumerate() {
            if !self.is_company(affiliation) {
                continue;
            }
            result.companies.push(affiliation.clone());
            if let Some(author) = authors.get(idx) {
                result.non_academic_authors.push(author.clone());
            }
        }

        result.joined()
    }

    /// Classify structurally parsed authors.
    ///
    /// Every matching affiliation is listed; an author is listed once no
    /// matter how many of their affiliations match.
    #[must_use]
    pub fn classify_authors(&self, authors: &[Author]) -> Classification {
        let mut result = Classification::default();

        for author in authors {
            let mut matched = false;
            for affiliation in &author.affiliations {
                if self.is_company(affiliation) {
                    result.companies.push(affiliation.clone());
                    matched = true;
                }
            }
            if matched {
                if let Some(name) = &author.last_name {
                    result.non_academic_authors.push(name.clone());
                }
            }
        }

        result
    }
}
