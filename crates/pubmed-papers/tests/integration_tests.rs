//! Integration tests against the live NCBI E-utilities API.
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use pubmed_papers::{AffiliationClassifier, Config, PaperFetcher, PubMedClient};

fn create_fetcher() -> PaperFetcher {
    let config = Config::from_env()
        .expect("config")
        .with_max_retries(3)
        .with_request_delay(std::time::Duration::from_millis(400));
    let client = PubMedClient::new(config).expect("Failed to create client");
    PaperFetcher::new(client, AffiliationClassifier::default())
}

#[tokio::test]
async fn test_live_search_and_fetch() {
    let fetcher = create_fetcher();
    let papers = fetcher.fetch_papers("pembrolizumab melanoma", Some(3)).await.unwrap();
    assert!(papers.len() <= 3);
    for paper in &papers {
        println!("{paper:?}");
        assert!(!paper.pubmed_id.is_empty());
    }
}
