//! Summary records and their persistence.
//!
//! One compact JSON file per site, named by the site's encoded key, under the
//! result directory. Existing files are left alone unless overwriting is asked
//! for, which makes re-runs cheap.

mod writer;

pub use writer::{write_atomic, TEMP_PREFIX};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SiteError;
use crate::url_model::EncodedKey;

/// Per-site summary as read by the index UI. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub site: String,
    pub description: String,
    pub title: String,
    pub saved: String,
}

/// What [`write_summary`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// A summary already existed and overwriting was off.
    Skipped,
}

/// Destination of the summary for `key`: `<result_dir>/<host><path>`.
pub fn summary_path(result_dir: &Path, key: &EncodedKey) -> PathBuf {
    result_dir.join(key.summary_file_name())
}

/// Persist `summary` for `key` under `result_dir`.
///
/// Skips (without error) when the destination exists and `overwrite` is false.
/// Otherwise writes atomically; filesystem failures become [`SiteError::Write`].
pub fn write_summary(
    result_dir: &Path,
    key: &EncodedKey,
    summary: &SiteSummary,
    overwrite: bool,
) -> Result<WriteOutcome, SiteError> {
    let path = summary_path(result_dir, key);
    if !overwrite && path.exists() {
        return Ok(WriteOutcome::Skipped);
    }

    let write_err = |source: std::io::Error| SiteError::Write {
        path: path.display().to_string(),
        source,
    };
    let json = serde_json::to_vec(summary).map_err(|e| write_err(e.into()))?;
    write_atomic(&path, &json).map_err(write_err)?;
    Ok(WriteOutcome::Written)
}
