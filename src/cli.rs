//! Command-line interface definitions for arxiv_bulk.
//!
//! Every flag is optional. Unset flags fall back to the YAML config file
//! (when given) and then to the built-in defaults in [`crate::config`].

use clap::Parser;

/// Command-line arguments for arxiv_bulk.
///
/// # Examples
///
/// ```sh
/// # Reference run: RAG papers in cs.ai for 2025
/// arxiv_bulk
///
/// # Smaller run into a different index
/// arxiv_bulk --max-results 200 --index-name rag --corpus-path out/rag.jsonl
///
/// # Everything from a file
/// arxiv_bulk --config run.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML run config
    #[arg(short, long, env = "ARXIV_BULK_CONFIG")]
    pub config: Option<String>,

    /// Free-text phrase to search for
    #[arg(short, long)]
    pub query: Option<String>,

    /// arXiv category code (e.g. cs.ai)
    #[arg(long)]
    pub category: Option<String>,

    /// Total number of results to fetch
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// submittedDate range, e.g. [2025+TO+2025]
    #[arg(long)]
    pub date_range: Option<String>,

    /// Sort field (relevance, lastUpdatedDate, submittedDate)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (ascending, descending)
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Results per request
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Search API endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Index name written into every bulk directive
    #[arg(short, long)]
    pub index_name: Option<String>,

    /// Output path for the JSONL corpus
    #[arg(long)]
    pub corpus_path: Option<String>,

    /// Output path for the bulk NDJSON file
    #[arg(long)]
    pub bulk_path: Option<String>,

    /// Pause between page requests in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
