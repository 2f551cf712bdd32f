//! Data models for normalized papers and bulk-index directives.
//!
//! - [`Paper`]: the canonical flat record written to both output files
//! - [`BulkAction`]: the directive line preceding each record in the bulk file
//!
//! The raw feed shapes live in [`crate::feed`]; nothing here knows about XML.

use serde::{Deserialize, Serialize};

/// A normalized arXiv paper.
///
/// Field order is the key order of the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Paper {
    /// The arXiv abstract URL used as identifier (e.g. `http://arxiv.org/abs/2501.00001v1`).
    pub id: String,
    /// Paper title as published in the feed.
    pub title: String,
    /// Abstract text.
    pub summary: String,
    /// Publication timestamp exactly as provided by the source.
    pub date_published: String,
    /// Author names in source order.
    pub authors: Vec<String>,
    /// Link to the PDF.
    pub pdf_link: String,
}

/// An `index` action directive for the bulk ingestion format.
///
/// Serializes to `{"index":{"_index":"<name>"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BulkAction {
    pub index: IndexTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexTarget {
    #[serde(rename = "_index")]
    pub index: String,
}

impl BulkAction {
    pub fn index(name: &str) -> Self {
        Self {
            index: IndexTarget {
                index: name.to_string(),
            },
        }
    }
}
