//! On-disk capture roots for integration tests.
//!
//! Lays out `<root>/webgrab/<name>/config.json` and `<root>/webgrab/<name>/cache.zip`
//! the way the capture tool leaves them.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use discoverer_core::config::DiscovererConfig;
use discoverer_core::reindex::ReindexLayout;
use tempfile::TempDir;
use zip::write::FileOptions;

pub const HEADERS_2024: &str = r#"{"date": "Mon, 01 Jan 2024 00:00:00 GMT"}"#;

pub fn page(title: &str, description: &str) -> String {
    format!(
        r#"<html><head><title>{title}</title><meta name="description" content="{description}"></head><body></body></html>"#
    )
}

pub struct CaptureRoot {
    dir: TempDir,
}

impl CaptureRoot {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("webgrab")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn layout(&self) -> ReindexLayout {
        DiscovererConfig::default().layout(self.path())
    }

    pub fn config_dir(&self, name: &str) -> PathBuf {
        self.path().join("webgrab").join(name)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.path().join("discoverer")
    }

    /// Write `config.json` listing `sites` (with an extra field the core ignores).
    pub fn write_site_list(&self, name: &str, sites: &[&str]) {
        let dir = self.config_dir(name);
        fs::create_dir_all(&dir).unwrap();
        let list: Vec<serde_json::Value> = sites
            .iter()
            .map(|s| serde_json::json!({ "site": s, "depth": 1 }))
            .collect();
        fs::write(dir.join("config.json"), serde_json::to_vec(&list).unwrap()).unwrap();
    }

    /// Write (or replace) `cache.zip` with the given entries.
    pub fn write_archive(&self, name: &str, entries: &[(String, String)]) {
        let dir = self.config_dir(name);
        fs::create_dir_all(&dir).unwrap();
        let mut zip = zip::ZipWriter::new(File::create(dir.join("cache.zip")).unwrap());
        for (entry, body) in entries {
            zip.start_file(entry.as_str(), FileOptions::default()).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    pub fn read_summary(&self, file_name: &str) -> String {
        fs::read_to_string(self.results_dir().join(file_name)).unwrap()
    }
}

/// Content and headers entries for one captured page.
pub fn captured(host: &str, path: &str, html: &str, headers: &str) -> Vec<(String, String)> {
    let base = format!("responses/{host}/{path}");
    vec![
        (base.clone(), html.to_string()),
        (format!("{base}.headers"), headers.to_string()),
    ]
}
