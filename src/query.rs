//! Query construction for the arXiv search API.
//!
//! arXiv's query grammar gives `:`, `+`, `[` and `]` meaning (`cat:cs.ai`,
//! `+AND+`, `[2025+TO+2025]`), so those characters must reach the server
//! unescaped. Everything else goes through form encoding.

use crate::config::QuerySpec;
use url::Url;

/// Characters kept literal on top of the unreserved set.
const QUERY_SAFE: &[char] = &[':', '+', '[', ']'];

/// A ready-to-paginate search: fixed endpoint and parameters plus the `start` cursor.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    base_url: Url,
    search_query: String,
    sort_by: String,
    sort_order: String,
    start: usize,
    page_size: usize,
    max_results: usize,
}

impl SearchQuery {
    /// Build a query positioned at `start = 0`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API endpoint, without query string.
    /// * `spec` - Search terms and paging limits; the search expression is
    ///   composed once here.
    ///
    /// # Returns
    ///
    /// A query ready for [`SearchQuery::url`]; advance it with
    /// [`SearchQuery::set_start`].
    pub fn new(base_url: Url, spec: &QuerySpec) -> Self {
        Self {
            base_url,
            search_query: compose_search_expression(spec),
            sort_by: spec.sort_by.clone(),
            sort_order: spec.sort_order.clone(),
            start: 0,
            page_size: spec.page_size,
            max_results: spec.max_results,
        }
    }

    pub fn set_start(&mut self, start: usize) {
        self.start = start;
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Results requested per page (sent as `max_results`).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of results wanted across all pages.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn search_expression(&self) -> &str {
        &self.search_query
    }

    /// Full request URL for the current cursor position.
    pub fn url(&self) -> Url {
        let start = self.start.to_string();
        let page_size = self.page_size.to_string();
        let params: [(&str, &str); 5] = [
            ("search_query", self.search_query.as_str()),
            ("sortBy", self.sort_by.as_str()),
            ("sortOrder", self.sort_order.as_str()),
            ("start", start.as_str()),
            ("max_results", page_size.as_str()),
        ];
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = self.base_url.clone();
        url.set_query(Some(&query));
        url
    }
}

/// Build `all:"<text>"+AND+cat:<category>+AND+submittedDate:<range>`.
pub fn compose_search_expression(spec: &QuerySpec) -> String {
    format!(
        "all:\"{}\"+AND+cat:{}+AND+submittedDate:{}",
        spec.query_text, spec.category, spec.date_range
    )
}

/// Form-encode one query component, leaving `:`, `+`, `[`, `]` untouched.
///
/// Spaces become `+`, which the API reads as a space.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ' ' {
            out.push('+');
        } else if QUERY_SAFE.contains(&c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}
