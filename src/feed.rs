//! Typed view of the arXiv Atom feed.
//!
//! Only the elements the normalizer reads are modelled; everything else in
//! the feed (`arxiv:*` extensions, categories, `opensearch:*` counters) is
//! ignored by the deserializer. All fields are optional so a missing element
//! surfaces as [`Error::MalformedEntry`](crate::error::Error) at
//! normalization time instead of a generic parse error here.

use crate::error::Result;
use serde::Deserialize;

/// One page of results.
#[derive(Debug, Default, Deserialize)]
pub struct RawFeed {
    #[serde(rename = "entry", default)]
    pub entries: Vec<RawEntry>,
}

/// One `<entry>` as it appears in the feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
    #[serde(rename = "author", default)]
    pub authors: Vec<RawAuthor>,
    #[serde(rename = "link", default)]
    pub links: Vec<RawLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAuthor {
    pub name: Option<String>,
}

/// `<link href=".." type=".." title=".."/>`; `rel` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLink {
    #[serde(rename = "@href")]
    pub href: Option<String>,
    #[serde(rename = "@type")]
    pub mime_type: Option<String>,
    #[serde(rename = "@title")]
    pub title: Option<String>,
}

impl RawEntry {
    /// arXiv reports query errors as a single entry whose id lives under `/api/errors`.
    pub fn api_error(&self) -> Option<String> {
        let id = self.id.as_deref()?;
        if !id.contains("/api/errors") {
            return None;
        }
        Some(
            self.summary
                .clone()
                .unwrap_or_else(|| id.to_string()),
        )
    }
}

pub fn parse_feed(body: &str) -> Result<RawFeed> {
    Ok(quick_xml::de::from_str(body)?)
}
