//! Per-site pipeline as an explicit state machine.
//!
//! `Pending -> Located -> Extracted -> Written`, short-circuiting to a
//! [`SiteError`] on the first failing step. A site whose summary already
//! exists goes straight from `Pending` to `Written(Skipped)` when overwriting
//! is off.

use std::path::Path;

use crate::archive::{CacheArchive, LocatedEntries};
use crate::error::SiteError;
use crate::extract::{extract_page, extract_saved_date};
use crate::summary::{summary_path, write_summary, SiteSummary, WriteOutcome};
use crate::url_model::{encode_url, EncodedKey};

/// Where a site is in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteState {
    Pending {
        site: String,
    },
    Located {
        site: String,
        key: EncodedKey,
        entries: LocatedEntries,
    },
    Extracted {
        key: EncodedKey,
        summary: SiteSummary,
    },
    Written(WriteOutcome),
}

/// What every step needs besides the state itself.
pub struct SiteContext<'a> {
    pub archive: &'a mut CacheArchive,
    pub results_dir: &'a Path,
    pub overwrite: bool,
}

impl SiteState {
    /// Run the next step. Terminal states are returned unchanged.
    pub fn advance(self, ctx: &mut SiteContext<'_>) -> Result<SiteState, SiteError> {
        match self {
            SiteState::Pending { site } => {
                let key = encode_url(&site)?;
                if !ctx.overwrite && summary_path(ctx.results_dir, &key).exists() {
                    return Ok(SiteState::Written(WriteOutcome::Skipped));
                }
                let entries = ctx.archive.locate(&key)?;
                tracing::debug!(
                    site = %site,
                    content = %entries.content.name,
                    headers = %entries.headers.name,
                    "located"
                );
                Ok(SiteState::Located { site, key, entries })
            }
            SiteState::Located { site, key, entries } => {
                let html = ctx.archive.read_to_string(&entries.content)?;
                let page = extract_page(&html)?;
                let header_json = ctx.archive.read_to_string(&entries.headers)?;
                let saved = extract_saved_date(&header_json)?;
                let summary = SiteSummary {
                    site,
                    description: page.description,
                    title: page.title,
                    saved: saved.to_string(),
                };
                Ok(SiteState::Extracted { key, summary })
            }
            SiteState::Extracted { key, summary } => {
                let outcome = write_summary(ctx.results_dir, &key, &summary, ctx.overwrite)?;
                Ok(SiteState::Written(outcome))
            }
            written @ SiteState::Written(_) => Ok(written),
        }
    }
}

/// Drive `site` from `Pending` to a terminal state.
pub fn process_site(site: &str, ctx: &mut SiteContext<'_>) -> Result<WriteOutcome, SiteError> {
    let mut state = SiteState::Pending {
        site: site.to_string(),
    };
    loop {
        state = state.advance(ctx)?;
        if let SiteState::Written(outcome) = state {
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntryKind;
    use std::fs::File;
    use std::io::Write;
    use zip::write::FileOptions;

    const PAGE: &str = r#"<html><head><title>Hi</title><meta name="description" content="desc"></head></html>"#;
    const HEADERS: &str = r#"{"date": "Mon, 01 Jan 2024 00:00:00 GMT"}"#;

    fn archive_with(dir: &Path, entries: &[(&str, &str)]) -> CacheArchive {
        let path = dir.join("cache.zip");
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        for (name, body) in entries {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        CacheArchive::open(&path).unwrap()
    }

    #[test]
    fn walks_every_state_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut archive = archive_with(
            dir.path(),
            &[
                ("responses/example.com/%2Fa", PAGE),
                ("responses/example.com/%2Fa.headers", HEADERS),
            ],
        );
        let mut ctx = SiteContext {
            archive: &mut archive,
            results_dir: dir.path(),
            overwrite: false,
        };

        let state = SiteState::Pending {
            site: "https://example.com/a".to_string(),
        };
        let state = state.advance(&mut ctx).unwrap();
        assert!(matches!(state, SiteState::Located { .. }));
        let state = state.advance(&mut ctx).unwrap();
        match &state {
            SiteState::Extracted { summary, .. } => {
                assert_eq!(summary.title, "Hi");
                assert_eq!(summary.description, "desc");
                assert_eq!(summary.saved, "Mon Jan 01 2024");
            }
            other => panic!("expected Extracted, got {other:?}"),
        }
        let state = state.advance(&mut ctx).unwrap();
        assert_eq!(state, SiteState::Written(WriteOutcome::Written));
        assert_eq!(
            state.advance(&mut ctx).unwrap(),
            SiteState::Written(WriteOutcome::Written)
        );
    }

    #[test]
    fn existing_summary_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let mut archive = archive_with(dir.path(), &[]);
        std::fs::write(dir.path().join("example.com%2Fa"), "{}").unwrap();
        let mut ctx = SiteContext {
            archive: &mut archive,
            results_dir: dir.path(),
            overwrite: false,
        };
        assert_eq!(
            process_site("https://example.com/a", &mut ctx).unwrap(),
            WriteOutcome::Skipped
        );
    }

    #[test]
    fn first_failure_stops_the_site() {
        let dir = tempfile::tempdir().unwrap();
        let mut archive = archive_with(dir.path(), &[("responses/example.com/%2Fa", PAGE)]);
        let mut ctx = SiteContext {
            archive: &mut archive,
            results_dir: dir.path(),
            overwrite: true,
        };
        match process_site("https://example.com/a", &mut ctx) {
            Err(SiteError::EntryNotFound { entry, .. }) => assert_eq!(entry, EntryKind::Headers),
            other => panic!("expected EntryNotFound, got {other:?}"),
        }
        assert!(!dir.path().join("example.com%2Fa").exists());

        match process_site("::nope::", &mut ctx) {
            Err(SiteError::MalformedUrl { .. }) => {}
            other => panic!("expected MalformedUrl, got {other:?}"),
        }
    }
}
