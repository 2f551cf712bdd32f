//! Error types for the arXiv ingestion pipeline.
//!
//! Every failure is fatal for the run: there are no retries and no
//! per-record skips. The variants separate transport problems, feed
//! problems and local I/O so the log line says which stage gave up.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Request could not be sent or the body could not be read (includes timeouts)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Numeric status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// The API reported a query error inside an otherwise valid feed
    #[error("arXiv API error: {0}")]
    Api(String),

    /// Response body is not a parseable Atom feed
    #[error("feed parse error: {0}")]
    FeedParse(#[from] quick_xml::de::DeError),

    /// A feed entry lacks a field the canonical record needs
    #[error("malformed source record #{index}: missing {field}")]
    MalformedEntry {
        /// Position of the entry in the fetched sequence
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML config file could not be read
    #[error("config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
