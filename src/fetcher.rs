//! Paginated retrieval of feed entries.
//!
//! The cursor walks `0, page_size, 2 * page_size, ...` while it stays below
//! `max_results`. Every request asks for a full page; the accumulated entries
//! are cut back to `max_results` at the end. An empty page means the source
//! is exhausted and ends the loop early.

use crate::api::Transport;
use crate::error::{Error, Result};
use crate::feed::{RawEntry, parse_feed};
use crate::query::SearchQuery;
use crate::utils::truncate_for_log;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Drives the page loop against a [`Transport`].
#[derive(Debug)]
pub struct Fetcher<T> {
    transport: T,
    /// Fixed pause between consecutive requests.
    delay: Duration,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, delay: Duration) -> Self {
        Self { transport, delay }
    }

    /// Fetch every page for `query`, in order.
    ///
    /// Returns at most `query.max_results()` entries; fewer when the source
    /// runs dry first.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, unparseable body or API
    /// error entry aborts the whole fetch. Nothing is retried.
    #[instrument(
        level = "info",
        skip_all,
        fields(max_results = query.max_results(), page_size = query.page_size())
    )]
    pub async fn fetch_all(&self, query: &mut SearchQuery) -> Result<Vec<RawEntry>> {
        let max_total = query.max_results();
        let page_size = query.page_size();
        if page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }

        let mut all_entries = Vec::new();
        let mut starts = (0..max_total).step_by(page_size).peekable();

        while let Some(start) = starts.next() {
            query.set_start(start);
            let url = query.url();
            info!(
                start = query.start(),
                end = start.saturating_add(page_size),
                "Fetching results"
            );

            let body = self.transport.get(&url).await?;
            let feed = match parse_feed(&body) {
                Ok(feed) => feed,
                Err(e) => {
                    warn!(
                        error = %e,
                        body_preview = %truncate_for_log(&body, 300),
                        "Response is not a valid Atom feed"
                    );
                    return Err(e);
                }
            };

            if let Some(message) = feed.entries.first().and_then(RawEntry::api_error) {
                return Err(Error::Api(message));
            }

            if feed.entries.is_empty() {
                info!(start, "No more entries found");
                break;
            }

            debug!(start, count = feed.entries.len(), "Page received");
            all_entries.extend(feed.entries);

            if starts.peek().is_some() && !self.delay.is_zero() {
                sleep(self.delay).await;
            }
        }

        all_entries.truncate(max_total);
        info!(count = all_entries.len(), "Fetched total entries");
        Ok(all_entries)
    }
}
