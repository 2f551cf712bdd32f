//! Output writers for the two line-delimited JSON formats.
//!
//! # Submodules
//!
//! - [`jsonl`]: one [`Paper`](crate::models::Paper) per line (the corpus file)
//! - [`bulk`]: `_bulk` NDJSON, an `index` directive before every record
//!
//! Both writers replace the destination file wholesale and create missing
//! parent directories first.
//!
//! # Output Structure
//!
//! ```text
//! corpus/
//! ├── corpus.jsonl         # {"id":..,"title":..,...}
//! └── arxiv.bulk.ndjson    # {"index":{"_index":"arxiv"}}
//!                          # {"id":..,"title":..,...}
//! ```

pub mod bulk;
pub mod jsonl;
