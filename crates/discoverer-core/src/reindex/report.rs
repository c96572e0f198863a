//! Outcome of a reindex run.

use crate::error::SiteError;

/// A site that could not be summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFailure {
    /// Config directory name the site came from.
    pub config: String,
    pub site: String,
    /// Stable label from [`SiteError::kind`].
    pub kind: &'static str,
    pub message: String,
}

impl SiteFailure {
    pub fn new(config: &str, site: &str, err: &SiteError) -> Self {
        Self {
            config: config.to_string(),
            site: site.to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Counts and failures accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReindexReport {
    /// Config directories processed.
    pub configs: usize,
    /// Summaries written this run.
    pub written: usize,
    /// Sites whose summary already existed (overwrite off).
    pub skipped: usize,
    pub failures: Vec<SiteFailure>,
}

impl ReindexReport {
    pub fn succeeded(&self) -> usize {
        self.written
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.written + self.skipped + self.failures.len()
    }
}
