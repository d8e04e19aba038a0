//! Data models for PubMed records.
//!
//! `PaperRecord` is the flat exported row; `ParsedArticle` and `Author` hold the
//! structured fields pulled out of an EFetch document; `ESearchResponse` mirrors
//! the ESearch JSON payload.

mod article;
mod esearch;
mod record;

pub use article::{Author, ParsedArticle};
pub use esearch::{ESearchResponse, ESearchResult};
pub use record::{COLUMNS, NOT_AVAILABLE, PaperRecord};
