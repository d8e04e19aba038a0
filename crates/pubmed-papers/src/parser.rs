//! EFetch XML parser.
//!
//! Reads the first `PubmedArticle` of a document with `quick-xml`. Authors are
//! parsed from their own `<Author>` elements, so each author's affiliations and
//! email stay attached to that author.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::classifier::AffiliationClassifier;
use crate::error::{ParseError, ParseResult};
use crate::models::{Author, NOT_AVAILABLE, PaperRecord, ParsedArticle};

/// Parse an EFetch document and classify its authors into a flat record.
pub fn parse_record(xml: &str, classifier: &AffiliationClassifier) -> ParseResult<PaperRecord> {
    let article = parse_article(xml)?;
    Ok(build_record(article, classifier))
}

/// Flatten a parsed article into an export row.
#[must_use]
pub fn build_record(article: ParsedArticle, classifier: &AffiliationClassifier) -> PaperRecord {
    let (non_academic_authors, company_affiliations) =
        classifier.classify_authors(&article.authors).joined();

    PaperRecord {
        corresponding_email: article
            .corresponding_email()
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        pubmed_id: article.pmid,
        title: article.title.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        publication_date: article.year.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        non_academic_authors,
        company_affiliations,
    }
}

/// Parse the first `PubmedArticle` in an EFetch document.
pub fn parse_article(xml: &str) -> ParseResult<ParsedArticle> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"PubmedArticle" => {
                let article = parse_pubmed_article(&mut reader)?;
                debug!(
                    pmid = %article.pmid,
                    authors = article.authors.len(),
                    affiliations = article.affiliations.len(),
                    "Parsed article"
                );
                return Ok(article);
            }
            Event::Eof => return Err(ParseError::NoArticle),
            _ => {}
        }
        buf.clear();
    }
}

fn parse_pubmed_article(reader: &mut Reader<&[u8]>) -> ParseResult<ParsedArticle> {
    let mut article = ParsedArticle::default();
    let mut pmid = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"PMID" if pmid.is_none() => pmid = read_text_content(reader, "PMID")?,
                b"ArticleTitle" if article.title.is_none() => {
                    article.title = read_text_content(reader, "ArticleTitle")?;
                }
                b"PubDate" if article.year.is_none() => article.year = parse_pub_date(reader)?,
                b"Author" => {
                    let author = parse_author(reader)?;
                    article.affiliations.extend(author.affiliations.iter().cloned());
                    article.authors.push(author);
                }
                b"Affiliation" => {
                    if let Some(aff) = read_text_content(reader, "Affiliation")? {
                        article.affiliations.push(aff);
                    }
                }
                _ => {}
            },
            Event::Empty(e) if e.name().as_ref() == b"Author" => {
                article.authors.push(Author::default());
            }
            Event::End(e) if e.name().as_ref() == b"PubmedArticle" => break,
            Event::Eof => return Err(ParseError::UnexpectedEof("PubmedArticle")),
            _ => {}
        }
        buf.clear();
    }

    article.pmid = pmid.ok_or(ParseError::MissingElement("PMID"))?;
    Ok(article)
}

/// `<Year>` directly under `<PubDate>`.
fn parse_pub_date(reader: &mut Reader<&[u8]>) -> ParseResult<Option<String>> {
    let mut year = None;
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if depth == 0 && year.is_none() && e.name().as_ref() == b"Year" => {
                year = read_text_content(reader, "Year")?;
            }
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                if depth == 0 && e.name().as_ref() == b"PubDate" {
                    break;
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => return Err(ParseError::UnexpectedEof("PubDate")),
            _ => {}
        }
        buf.clear();
    }

    Ok(year)
}

fn parse_author(reader: &mut Reader<&[u8]>) -> ParseResult<Author> {
    let mut author = Author::default();
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"LastName" if author.last_name.is_none() => {
                    author.last_name = read_text_content(reader, "LastName")?;
                }
                // Only a direct child counts as the author's email.
                b"Email" if depth == 0 && author.email.is_none() => {
                    author.email = read_text_content(reader, "Email")?;
                }
                b"Affiliation" => {
                    if let Some(aff) = read_text_content(reader, "Affiliation")? {
                        author.affiliations.push(aff);
                    }
                }
                _ => depth += 1,
            },
            Event::End(e) => {
                if depth == 0 && e.name().as_ref() == b"Author" {
                    break;
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => return Err(ParseError::UnexpectedEof("Author")),
            _ => {}
        }
        buf.clear();
    }

    Ok(author)
}

/// Read the text of an element whose start tag was just consumed, flattening
/// inline markup such as `<i>` or `<sup>`. Blank text yields `None`.
fn read_text_content(
    reader: &mut Reader<&[u8]>,
    end_tag: &'static str,
) -> ParseResult<Option<String>> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag.as_bytes() {
                    break;
                }
            }
            Event::Eof => return Err(ParseError::UnexpectedEof(end_tag)),
            _ => {}
        }
        buf.clear();
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok((!text.is_empty()).then_some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_XML: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">111</PMID>
        <Article PubModel="Print">
            <Journal>
                <JournalIssue CitedMedium="Internet">
                    <PubDate><Year>2020</Year><Month>Mar</Month></PubDate>
                </JournalIssue>
            </Journal>
            <ArticleTitle>A Study of <i>KRAS</i> &amp; friends.</ArticleTitle>
            <AuthorList CompleteYN="Y">
                <Author ValidYN="Y">
                    <LastName>Smith</LastName>
                    <ForeName>Anna</ForeName>
                    <AffiliationInfo><Affiliation>Acme Pharma Inc, Boston, MA.</Affiliation></AffiliationInfo>
                    <Email>anna.smith@acme.com</Email>
                </Author>
                <Author ValidYN="Y">
                    <LastName>Jones</LastName>
                    <AffiliationInfo><Affiliation>Department of Biology, MIT.</Affiliation></AffiliationInfo>
                </Author>
            </AuthorList>
        </Article>
        <CommentsCorrectionsList>
            <CommentsCorrections RefType="ErratumIn"><PMID Version="1">999</PMID></CommentsCorrections>
        </CommentsCorrectionsList>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn test_parse_article_fields() {
        let article = parse_article(ARTICLE_XML).unwrap();
        assert_eq!(article.pmid, "111");
        assert_eq!(article.title.as_deref(), Some("A Study of KRAS & friends."));
        assert_eq!(article.year.as_deref(), Some("2020"));
        assert_eq!(article.author_names(), vec!["Smith", "Jones"]);
        assert_eq!(
            article.affiliations,
            vec!["Acme Pharma Inc, Boston, MA.", "Department of Biology, MIT."]
        );
        assert_eq!(article.corresponding_email(), Some("anna.smith@acme.com"));
    }

    #[test]
    fn test_parse_record_classifies_authors() {
        let record = parse_record(ARTICLE_XML, &AffiliationClassifier::default()).unwrap();
        assert_eq!(record.pubmed_id, "111");
        assert_eq!(record.non_academic_authors, "Smith");
        assert_eq!(record.company_affiliations, "Acme Pharma Inc, Boston, MA.");
        assert_eq!(record.corresponding_email, "anna.smith@acme.com");
    }

    #[test]
    fn test_missing_optional_fields_fall_back() {
        let xml = "<PubmedArticleSet><PubmedArticle><MedlineCitation>\
                   <PMID>42</PMID><Article/></MedlineCitation></PubmedArticle></PubmedArticleSet>";
        let record = parse_record(xml, &AffiliationClassifier::default()).unwrap();
        assert_eq!(record.pubmed_id, "42");
        assert_eq!(record.title, "N/A");
        assert_eq!(record.publication_date, "N/A");
        assert_eq!(record.non_academic_authors, "");
        assert_eq!(record.company_affiliations, "");
        assert_eq!(record.corresponding_email, "N/A");
    }

    #[test]
    fn test_missing_pmid_is_an_error() {
        let xml = "<PubmedArticleSet><PubmedArticle><ArticleTitle>X</ArticleTitle>\
                   </PubmedArticle></PubmedArticleSet>";
        assert!(matches!(parse_article(xml), Err(ParseError::MissingElement("PMID"))));
    }

    #[test]
    fn test_missing_article_is_an_error() {
        let xml = "<PubmedArticleSet></PubmedArticleSet>";
        assert!(matches!(parse_article(xml), Err(ParseError::NoArticle)));
    }

    #[test]
    fn test_medline_date_has_no_year() {
        let xml = "<PubmedArticle><PMID>7</PMID>\
                   <PubDate><MedlineDate>1998 Dec-1999 Jan</MedlineDate></PubDate>\
                   </PubmedArticle>";
        assert_eq!(parse_article(xml).unwrap().year, None);
    }

    #[test]
    fn test_unclosed_pub_date_is_an_error() {
        let xml = "<PubmedArticle><PMID>7</PMID><PubDate><Month>Mar</Month>";
        assert!(matches!(parse_article(xml), Err(ParseError::UnexpectedEof("PubDate"))));
    }
}
