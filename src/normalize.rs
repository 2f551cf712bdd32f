//! Mapping from raw feed entries to [`Paper`] records.
//!
//! The mapping is total over well-formed entries and fails on the first
//! entry missing something a [`Paper`] needs. There is no per-record skip.

use crate::error::{Error, Result};
use crate::feed::{RawEntry, RawLink};
use crate::models::Paper;
use tracing::{info, instrument};

/// Pick the PDF link of an entry.
///
/// A link titled `pdf` or typed `application/pdf` wins. Without either
/// marker the last link is used, since arXiv lists the PDF link last.
pub fn select_pdf_link(links: &[RawLink]) -> Option<&str> {
    links
        .iter()
        .find(|l| {
            l.title.as_deref() == Some("pdf") || l.mime_type.as_deref() == Some("application/pdf")
        })
        .or_else(|| links.last())
        .and_then(|l| l.href.as_deref())
}

/// Normalize one entry. `index` is only used to point at the culprit in errors.
pub fn normalize_entry(index: usize, entry: &RawEntry) -> Result<Paper> {
    let missing = |field: &'static str| Error::MalformedEntry { index, field };

    if entry.authors.is_empty() {
        return Err(missing("authors"));
    }
    let authors = entry
        .authors
        .iter()
        .map(|a| a.name.clone().ok_or_else(|| missing("author name")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Paper {
        id: entry.id.clone().ok_or_else(|| missing("id"))?,
        title: entry.title.clone().ok_or_else(|| missing("title"))?,
        summary: entry.summary.clone().ok_or_else(|| missing("summary"))?,
        date_published: entry.published.clone().ok_or_else(|| missing("published"))?,
        authors,
        pdf_link: select_pdf_link(&entry.links)
            .map(str::to_string)
            .ok_or_else(|| missing("links"))?,
    })
}

#[instrument(level = "info", skip_all, fields(count = entries.len()))]
pub fn normalize_all(entries: &[RawEntry]) -> Result<Vec<Paper>> {
    let papers = entries
        .iter()
        .enumerate()
        .map(|(i, e)| normalize_entry(i, e))
        .collect::<Result<Vec<_>>>()?;
    info!(count = papers.len(), "Normalized entries");
    Ok(papers)
}
