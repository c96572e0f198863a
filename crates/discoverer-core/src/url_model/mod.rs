//! URL modeling and archive key derivation.
//!
//! A site URL maps to a two-part key: an encoded host segment (the archive's
//! per-host directory) and an encoded path segment (the entry name inside it).
//! The same key names the summary file. The scheme must stay byte-for-byte
//! identical to the one the capture tool used when it wrote the archive.

mod component;

pub use component::encode_uri_component;

use crate::checksum::sha256_hex;
use crate::error::SiteError;

/// Encoded paths longer than this are replaced by their SHA-256 hex digest.
pub const MAX_PATH_SEGMENT_LEN: usize = 128;

/// Filesystem-safe key for one site URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedKey {
    pub hostname_segment: String,
    pub path_segment: String,
}

impl EncodedKey {
    /// Name of the captured response entry: `responses/<host>/<path>`.
    pub fn content_entry_name(&self) -> String {
        format!("responses/{}/{}", self.hostname_segment, self.path_segment)
    }

    /// Name of the headers entry: the content entry name plus `.headers`.
    pub fn headers_entry_name(&self) -> String {
        format!("{}.headers", self.content_entry_name())
    }

    /// Summary file name: host segment and path segment concatenated.
    pub fn summary_file_name(&self) -> String {
        format!("{}{}", self.hostname_segment, self.path_segment)
    }
}

/// Derives the [`EncodedKey`] for `url`.
///
/// The host (with `:port` when the URL carries a non-default port) and the
/// path are each component-encoded. If the encoded path exceeds
/// [`MAX_PATH_SEGMENT_LEN`] it is replaced by the SHA-256 hex digest of the
/// encoded form (not of the raw path).
///
/// # Examples
///
/// - `encode_url("https://example.com/a")` → host `example.com`, path `%2Fa`
/// - `encode_url("http://localhost:8080/")` → host `localhost%3A8080`, path `%2F`
pub fn encode_url(url: &str) -> Result<EncodedKey, SiteError> {
    let parsed = url::Url::parse(url).map_err(|e| SiteError::MalformedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => {
            return Err(SiteError::MalformedUrl {
                url: url.to_string(),
                reason: "URL has no host".to_string(),
            })
        }
    };
    let host = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let hostname_segment = encode_uri_component(&host);
    let encoded_path = encode_uri_component(parsed.path());
    let path_segment = if encoded_path.len() > MAX_PATH_SEGMENT_LEN {
        sha256_hex(&encoded_path)
    } else {
        encoded_path
    };

    Ok(EncodedKey {
        hostname_segment,
        path_segment,
    })
}
