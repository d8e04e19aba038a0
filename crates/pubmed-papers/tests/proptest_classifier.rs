//! Property-based tests for the affiliation classifier.

use proptest::prelude::*;
use pubmed_papers::classifier::{AffiliationClassifier, DEFAULT_KEYWORDS};
use pubmed_papers::models::Author;

fn arb_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Z][a-z]{1,10}", 0..max)
}

fn arb_affiliations(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z ,.]{0,40}", 0..max)
}

/// Flip the case of every other ASCII letter.
fn mixed_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

proptest! {
    /// Classification is pure: same inputs, same output.
    #[test]
    fn classify_is_idempotent(authors in arb_names(8), affiliations in arb_affiliations(8)) {
        let classifier = AffiliationClassifier::default();
        let first = classifier.classify(&authors, &affiliations);
        let second = classifier.classify(&authors, &affiliations);
        prop_assert_eq!(first, second);
    }

    /// Mismatched list lengths never panic, and every company is listed.
    #[test]
    fn classify_never_panics_on_length_mismatch(
        authors in arb_names(10),
        affiliations in arb_affiliations(10),
    ) {
        let classifier = AffiliationClassifier::default();
        let (_, companies) = classifier.classify(&authors, &affiliations);
        let expected: Vec<&String> =
            affiliations.iter().filter(|a| classifier.is_company(a)).collect();
        let expected = expected.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ");
        prop_assert_eq!(companies, expected);
    }

    /// Any casing of a keyword inside an affiliation is detected.
    #[test]
    fn keyword_match_is_case_insensitive(
        prefix in "[0-9 ]{0,10}",
        suffix in "[0-9 ]{0,10}",
        idx in 0..DEFAULT_KEYWORDS.len(),
    ) {
        let classifier = AffiliationClassifier::default();
        let affiliation = format!("{prefix}{}{suffix}", mixed_case(DEFAULT_KEYWORDS[idx]));
        prop_assert!(classifier.is_company(&affiliation));
    }

    /// Structural classification lists each matching author exactly once.
    #[test]
    fn classify_authors_lists_each_author_once(
        names in arb_names(6),
        company_counts in proptest::collection::vec(0usize..3, 6),
    ) {
        let classifier = AffiliationClassifier::default();
        let authors: Vec<Author> = names
            .iter()
            .zip(&company_counts)
            .map(|(name, &n)| {
                let mut affs = vec!["University Hospital".to_string()];
                affs.extend((0..n).map(|i| format!("Company {i} Pharma")));
                Author::new(name.clone(), affs)
            })
            .collect();

        let result = classifier.classify_authors(&authors);
        let expected_authors = authors.iter().filter(|a| a.affiliations.len() > 1).count();
        let expected_companies: usize = authors.iter().map(|a| a.affiliations.len() - 1).sum();
        prop_assert_eq!(result.non_academic_authors.len(), expected_authors);
        prop_assert_eq!(result.companies.len(), expected_companies);
    }
}
