//! Run configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! CLI flags. Every key in the YAML file is optional.
//!
//! ```yaml
//! query:
//!   query_text: "Retrieval Augmented Generation"
//!   category: cs.ai
//!   max_results: 500
//! index_name: arxiv
//! delay_ms: 3000
//! ```

use crate::cli::Cli;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://export.arxiv.org/api/query";
pub const DEFAULT_USER_AGENT: &str = concat!("arxiv_bulk/", env!("CARGO_PKG_VERSION"));

/// The logical search: what to ask for and how to page through it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuerySpec {
    /// Free-text phrase, matched against all fields.
    pub query_text: String,
    /// arXiv category code, e.g. `cs.ai`.
    pub category: String,
    /// Total number of results wanted.
    pub max_results: usize,
    /// `submittedDate` range expression, e.g. `[2025+TO+2025]`.
    pub date_range: String,
    pub sort_by: String,
    pub sort_order: String,
    /// Results per request.
    pub page_size: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            query_text: "Retrieval Augmented Generation".to_string(),
            category: "cs.ai".to_string(),
            max_results: 5_000,
            date_range: "[2025+TO+2025]".to_string(),
            sort_by: "submittedDate".to_string(),
            sort_order: "descending".to_string(),
            page_size: 100,
        }
    }
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    pub query: QuerySpec,
    pub base_url: String,
    /// Target index named in every bulk directive.
    pub index_name: String,
    /// JSONL corpus output path.
    pub corpus_path: PathBuf,
    /// Bulk NDJSON output path.
    pub bulk_path: PathBuf,
    /// Pause between page requests, in milliseconds.
    pub delay_ms: u64,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            query: QuerySpec::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            index_name: "arxiv".to_string(),
            corpus_path: PathBuf::from("corpus/corpus.jsonl"),
            bulk_path: PathBuf::from("corpus/arxiv.bulk.ndjson"),
            delay_ms: 3_000,
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RunConfig {
    /// Read a YAML config file; absent keys keep their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: RunConfig = serde_yaml::from_str(text)?;
        debug!(?cfg, "Loaded YAML config");
        Ok(cfg)
    }

    /// Resolve the final configuration from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::from_yaml_file(Path::new(path))?,
            None => Self::default(),
        };
        cfg.apply_cli(cli);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Overlay any flag the user actually passed.
    pub fn apply_cli(&mut self, cli: &Cli) {
        let q = &mut self.query;
        if let Some(v) = &cli.query {
            q.query_text = v.clone();
        }
        if let Some(v) = &cli.category {
            q.category = v.clone();
        }
        if let Some(v) = cli.max_results {
            q.max_results = v;
        }
        if let Some(v) = &cli.date_range {
            q.date_range = v.clone();
        }
        if let Some(v) = &cli.sort_by {
            q.sort_by = v.clone();
        }
        if let Some(v) = &cli.sort_order {
            q.sort_order = v.clone();
        }
        if let Some(v) = cli.page_size {
            q.page_size = v;
        }
        if let Some(v) = &cli.base_url {
            self.base_url = v.clone();
        }
        if let Some(v) = &cli.index_name {
            self.index_name = v.clone();
        }
        if let Some(v) = &cli.corpus_path {
            self.corpus_path = PathBuf::from(v);
        }
        if let Some(v) = &cli.bulk_path {
            self.bulk_path = PathBuf::from(v);
        }
        if let Some(v) = cli.delay_ms {
            self.delay_ms = v;
        }
        if let Some(v) = cli.timeout_secs {
            self.timeout_secs = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        self.base_url()?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base_url {:?}: {}", self.base_url, e)))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
