//! Structured fields extracted from one EFetch document.

/// An author entry, parsed from its own `<Author>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    /// `<LastName>` text. Absent for collective authors.
    pub last_name: Option<String>,

    /// Every `<Affiliation>` text inside this author, in document order.
    pub affiliations: Vec<String>,

    /// `<Email>` child text, if present.
    pub email: Option<String>,
}

impl Author {
    /// Create an author with a last name and affiliations.
    #[must_use]
    pub fn new(last_name: impl Into<String>, affiliations: Vec<String>) -> Self {
        Self { last_name: Some(last_name.into()), affiliations, email: None }
    }
}

/// A parsed `PubmedArticle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArticle {
    /// PubMed identifier.
    pub pmid: String,

    /// First `<ArticleTitle>` text.
    pub title: Option<String>,

    /// First `<PubDate>/<Year>` text.
    pub year: Option<String>,

    /// Authors in document order.
    pub authors: Vec<Author>,

    /// Every `<Affiliation>` text in the article, in document order.
    pub affiliations: Vec<String>,
}

impl ParsedArticle {
    /// Last names of authors that have one, in document order.
    #[must_use]
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().filter_map(|a| a.last_name.clone()).collect()
    }

    /// Email of the first author carrying an `<Email>` element.
    #[must_use]
    pub fn corresponding_email(&self) -> Option<&str> {
        self.authors.iter().find_map(|a| a.email.as_deref())
    }
}
