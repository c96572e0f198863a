//! Per-site failure taxonomy.
//!
//! Every step of the per-site pipeline returns one of these. None of them abort
//! a run; the orchestrator records them and moves on to the next site.

use std::fmt;
use std::io;

/// Which of the two archive entries belonging to a site is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The captured response body (HTML).
    Content,
    /// The `.headers` sibling holding the response headers as JSON.
    Headers,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Content => write!(f, "content"),
            EntryKind::Headers => write!(f, "headers"),
        }
    }
}

/// Recoverable failure while summarizing a single site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The configured site is not an absolute URL with a host.
    #[error("malformed URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The config directory's archive is missing or corrupt.
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive has no entry with the expected name.
    #[error("{entry} entry not found: {name}")]
    EntryNotFound { entry: EntryKind, name: String },

    /// A located entry could not be read or decompressed.
    #[error("cannot read {entry} entry {name}: {source}")]
    EntryRead {
        entry: EntryKind,
        name: String,
        #[source]
        source: io::Error,
    },

    /// The captured HTML has no `<meta name="description">`.
    #[error("no <meta name=\"description\"> in captured page")]
    MissingDescription,

    /// The header JSON has no usable `date` field.
    #[error("missing or unparsable date header: {reason}")]
    MissingDateHeader { reason: String },

    /// The summary file could not be written.
    #[error("cannot write summary {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SiteError {
    /// Short stable label for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SiteError::MalformedUrl { .. } => "malformed-url",
            SiteError::ArchiveOpen { .. } => "archive-open",
            SiteError::EntryNotFound { .. } => "entry-not-found",
            SiteError::EntryRead { .. } => "entry-read",
            SiteError::MissingDescription => "missing-description",
            SiteError::MissingDateHeader { .. } => "missing-date-header",
            SiteError::Write { .. } => "write",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_not_found_names_the_missing_entry() {
        let err = SiteError::EntryNotFound {
            entry: EntryKind::Headers,
            name: "responses/example.com/%2Fa.headers".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "headers entry not found: responses/example.com/%2Fa.headers"
        );
        assert_eq!(err.kind(), "entry-not-found");
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            SiteError::MissingDescription.kind(),
            SiteError::MissingDateHeader {
                reason: String::new(),
            }
            .kind(),
            SiteError::MalformedUrl {
                url: String::new(),
                reason: String::new(),
            }
            .kind(),
        ];
        assert_ne!(kinds[0], kinds[1]);
        assert_ne!(kinds[1], kinds[2]);
    }
}
