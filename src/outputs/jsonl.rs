//! JSONL corpus output.

use crate::error::Result;
use crate::models::Paper;
use crate::utils::ensure_parent_dir;
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `papers` one per line into `out`.
///
/// # Arguments
///
/// * `papers` - Records in output order.
/// * `out` - Any writer; flushed before returning.
///
/// # Returns
///
/// `Ok(())` once every record has been written as one compact JSON object
/// terminated by `\n`.
pub fn render_jsonl<W: Write>(papers: &[Paper], mut out: W) -> Result<()> {
    for paper in papers {
        serde_json::to_writer(&mut out, paper)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Write the corpus file at `path`, replacing any previous contents.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Fails if the parent directory cannot be created or the file cannot be
/// written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_jsonl(path: &Path, papers: &[Paper]) -> Result<usize> {
    let mut buf = Vec::new();
    render_jsonl(papers, &mut buf)?;

    ensure_parent_dir(path).await?;
    fs::write(path, buf).await?;
    info!(count = papers.len(), path = %path.display(), "Saved entries to corpus file");
    Ok(papers.len())
}
