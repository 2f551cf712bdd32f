//! # arxiv_bulk
//!
//! Pulls search results from the arXiv API page by page, normalizes each
//! Atom entry into a flat paper record, and writes the records twice: as a
//! JSONL corpus and as an Elasticsearch/OpenSearch `_bulk` NDJSON file.
//!
//! ## Usage
//!
//! ```sh
//! arxiv_bulk --query "Retrieval Augmented Generation" --category cs.ai -n 500
//! curl -H 'Content-Type: application/x-ndjson' \
//!      --data-binary @corpus/arxiv.bulk.ndjson localhost:9200/_bulk
//! ```
//!
//! ## Architecture
//!
//! The run is a strictly sequential pipeline:
//! 1. **Query**: compose the search expression and request URL
//! 2. **Fetching**: walk the `start` cursor one page at a time, pausing between requests
//! 3. **Normalizing**: map raw feed entries to [`models::Paper`]
//! 4. **Output**: write the JSONL corpus and the bulk file

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod feed;
mod fetcher;
mod models;
mod normalize;
mod outputs;
mod pipeline;
mod query;
mod utils;

#[cfg(test)]
mod test_support;

use api::HttpTransport;
use cli::Cli;
use config::RunConfig;
use pipeline::Pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("arxiv_bulk starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match RunConfig::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(
        query = %config.query.query_text,
        category = %config.query.category,
        max_results = config.query.max_results,
        page_size = config.query.page_size,
        index = %config.index_name,
        "Resolved configuration"
    );

    let transport = HttpTransport::new(config.timeout(), &config.user_agent)?;
    let summary = match Pipeline::new(transport, &config).run(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Run failed");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        fetched = summary.fetched,
        written = summary.written,
        corpus = %summary.corpus_path.display(),
        bulk = %summary.bulk_path.display(),
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
