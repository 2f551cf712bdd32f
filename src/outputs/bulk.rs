//! Bulk NDJSON output for Elasticsearch/OpenSearch `_bulk` ingestion.
//!
//! Each record takes two lines: `{"index":{"_index":"<name>"}}` and then the
//! record itself.

use crate::error::Result;
use crate::models::{BulkAction, Paper};
use crate::utils::ensure_parent_dir;
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Render `papers` as bulk NDJSON into `out`.
///
/// # Arguments
///
/// * `papers` - Records in output order.
/// * `index_name` - Target index named in every action line.
/// * `out` - Any writer; flushed before returning.
///
/// # Returns
///
/// `Ok(())` once two lines per record have been written. Empty `papers`
/// writes nothing.
pub fn render_bulk<W: Write>(papers: &[Paper], index_name: &str, mut out: W) -> Result<()> {
    let action = serde_json::to_string(&BulkAction::index(index_name))?;
    for paper in papers {
        out.write_all(action.as_bytes())?;
        out.write_all(b"\n")?;
        serde_json::to_writer(&mut out, paper)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Write the bulk file at `path`, replacing any previous contents.
///
/// Returns the number of records written (half the line count).
#[instrument(level = "info", skip_all, fields(path = %path.display(), index = %index_name))]
pub async fn write_bulk(path: &Path, papers: &[Paper], index_name: &str) -> Result<usize> {
    let mut buf = Vec::new();
    render_bulk(papers, index_name, &mut buf)?;

    ensure_parent_dir(path).await?;
    fs::write(path, buf).await?;
    info!(
        count = papers.len(),
        path = %path.display(),
        index = %index_name,
        "Wrote bulk file"
    );
    Ok(papers.len())
}
