//! End-to-end run: build query, fetch pages, normalize, write both files.
//!
//! Stages run strictly in order and nothing is written until every entry
//! has been fetched and normalized, so a failed run leaves existing output
//! files untouched.

use crate::api::Transport;
use crate::config::RunConfig;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::normalize::normalize_all;
use crate::outputs::{bulk, jsonl};
use crate::query::SearchQuery;
use std::path::PathBuf;
use tracing::{info, instrument};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub written: usize,
    pub corpus_path: PathBuf,
    pub bulk_path: PathBuf,
}

pub struct Pipeline<T> {
    fetcher: Fetcher<T>,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(transport: T, config: &RunConfig) -> Self {
        Self {
            fetcher: Fetcher::new(transport, config.delay()),
        }
    }

    #[instrument(level = "info", skip_all, fields(index = %config.index_name))]
    pub async fn run(&self, config: &RunConfig) -> Result<RunSummary> {
        config.validate()?;

        let mut query = SearchQuery::new(config.base_url()?, &config.query);
        info!(search_query = %query.search_expression(), "Built search query");

        let entries = self.fetcher.fetch_all(&mut query).await?;
        let papers = normalize_all(&entries)?;

        let written = jsonl::write_jsonl(&config.corpus_path, &papers).await?;
        bulk::write_bulk(&config.bulk_path, &papers, &config.index_name).await?;

        Ok(RunSummary {
            fetched: entries.len(),
            written,
            corpus_path: config.corpus_path.clone(),
            bulk_path: config.bulk_path.clone(),
        })
    }
}
