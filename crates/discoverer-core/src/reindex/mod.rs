//! Batch run over every config directory.
//!
//! Walks `<configs_dir>/<name>/` in name order. Each directory's site list is
//! read, its archive is opened once, and every site goes through the per-site
//! pipeline. Site failures are recorded and never stop the run; only problems
//! that leave nothing useful to do (unreadable configs dir, unreadable or
//! malformed site list, no result dir) are returned as errors.

mod report;
mod site;

pub use report::{ReindexReport, SiteFailure};
pub use site::{process_site, SiteContext, SiteState};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::CacheArchive;
use crate::site_config::{load_site_configs, SiteConfig};
use crate::summary::WriteOutcome;

/// Input and output locations for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReindexLayout {
    pub configs_dir: PathBuf,
    pub results_dir: PathBuf,
    pub site_list_file: String,
    pub archive_file: String,
}

/// Summarize every configured site below `layout.configs_dir`.
pub fn run_reindex(layout: &ReindexLayout, overwrite: bool) -> Result<ReindexReport> {
    fs::create_dir_all(&layout.results_dir)
        .with_context(|| format!("create result dir: {}", layout.results_dir.display()))?;

    let mut report = ReindexReport::default();
    for config_dir in config_dirs(&layout.configs_dir)? {
        let name = config_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sites = load_site_configs(&config_dir.join(&layout.site_list_file))?;
        tracing::info!(config = %name, sites = sites.len(), "processing config");
        report.configs += 1;
        if sites.is_empty() {
            continue;
        }

        let archive_path = config_dir.join(&layout.archive_file);
        let mut archive = match CacheArchive::open(&archive_path) {
            Ok(archive) => archive,
            Err(err) => {
                tracing::warn!(config = %name, error = %err, "skipping config: archive unavailable");
                report
                    .failures
                    .extend(sites.iter().map(|s| SiteFailure::new(&name, &s.site, &err)));
                continue;
            }
        };
        if archive.is_empty() {
            tracing::warn!(config = %name, sites = sites.len(), "archive has no entries");
        } else {
            tracing::debug!(config = %name, entries = archive.len(), sites = sites.len(), "archive opened");
        }

        let mut ctx = SiteContext {
            archive: &mut archive,
            results_dir: &layout.results_dir,
            overwrite,
        };
        run_sites(&name, &sites, &mut ctx, &mut report);
    }

    tracing::info!(
        written = report.written,
        skipped = report.skipped,
        failed = report.failed(),
        "reindex finished"
    );
    Ok(report)
}

fn run_sites(
    config: &str,
    sites: &[SiteConfig],
    ctx: &mut SiteContext<'_>,
    report: &mut ReindexReport,
) {
    for SiteConfig { site } in sites {
        match process_site(site, ctx) {
            Ok(WriteOutcome::Written) => {
                tracing::info!(config, site = %site, "summary written");
                report.written += 1;
            }
            Ok(WriteOutcome::Skipped) => {
                tracing::info!(config, site = %site, "summary exists, skipped");
                report.skipped += 1;
            }
            Err(err) => {
                tracing::warn!(config, site = %site, kind = err.kind(), error = %err, "site failed");
                report.failures.push(SiteFailure::new(config, site, &err));
            }
        }
    }
}

/// Immediate subdirectories of `configs_dir`, sorted by name.
fn config_dirs(configs_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(configs_dir)
        .with_context(|| format!("read configs dir: {}", configs_dir.display()))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("read configs dir: {}", configs_dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
