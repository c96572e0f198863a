//! Site lists (`config.json`) written for the capture tool.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One configured site. The capture tool's other per-site fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub site: String,
}

/// Parse a site list: a JSON array of objects with at least a `site` field.
pub fn parse_site_configs(json: &str) -> Result<Vec<SiteConfig>> {
    let sites: Vec<SiteConfig> = serde_json::from_str(json)?;
    Ok(sites)
}

/// Read and parse the site list at `path`.
pub fn load_site_configs(path: &Path) -> Result<Vec<SiteConfig>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read site list: {}", path.display()))?;
    parse_site_configs(&data).with_context(|| format!("parse site list JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_ignored() {
        let json = r#"[
            {"site": "https://example.com/a", "depth": 2, "include": ["x"]},
            {"site": "https://example.org/"}
        ]"#;
        let sites = parse_site_configs(json).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].site, "https://example.com/a");
        assert_eq!(sites[1].site, "https://example.org/");
    }

    #[test]
    fn empty_list() {
        assert!(parse_site_configs("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_lists_rejected() {
        assert!(parse_site_configs("{\"site\": \"x\"}").is_err());
        assert!(parse_site_configs("[{\"url\": \"x\"}]").is_err());
        assert!(parse_site_configs("[").is_err());
    }

    #[test]
    fn load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let err = load_site_configs(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.json"));

        std::fs::write(&path, r#"[{"site": "https://example.com/"}]"#).unwrap();
        assert_eq!(load_site_configs(&path).unwrap().len(), 1);
    }
}
