//! Capture archive access (`cache.zip`).
//!
//! The archive's central directory is enumerated once when it is opened and
//! kept as a set of entry names, so locating a site's entries is two lookups
//! and a missing capture is an ordinary lookup miss. Entry data is only
//! touched when a located entry is read, so one unreadable entry fails only
//! the site it belongs to.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{EntryKind, SiteError};
use crate::url_model::EncodedKey;

/// A located archive entry, valid for the archive that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedEntry {
    pub kind: EntryKind,
    pub name: String,
}

/// Content entry and its `.headers` sibling for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedEntries {
    pub content: LocatedEntry,
    pub headers: LocatedEntry,
}

/// Open, read-only capture archive. Dropping it releases the file handle.
pub struct CacheArchive {
    zip: ZipArchive<File>,
    entries: HashSet<String>,
}

impl CacheArchive {
    /// Opens the archive at `path` and indexes its entry names from the
    /// central directory, without opening any entry's data.
    pub fn open(path: &Path) -> Result<Self, SiteError> {
        let open_err = |source: ZipError| SiteError::ArchiveOpen {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(|e| open_err(ZipError::Io(e)))?;
        let zip = ZipArchive::new(file).map_err(open_err)?;
        let entries: HashSet<String> = zip.file_names().map(str::to_string).collect();
        tracing::debug!(path = %path.display(), entries = entries.len(), "indexed archive");

        Ok(Self {
            zip,
            entries,
        })
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the content and headers entries for `key`.
    ///
    /// Names must match exactly (case-sensitive, whole name). If either entry
    /// is absent, fails with [`SiteError::EntryNotFound`] naming the missing
    /// one; the content entry is checked first.
    pub fn locate(&self, key: &EncodedKey) -> Result<LocatedEntries, SiteError> {
        let content = self.lookup(EntryKind::Content, key.content_entry_name())?;
        let headers = self.lookup(EntryKind::Headers, key.headers_entry_name())?;
        Ok(LocatedEntries { content, headers })
    }

    fn lookup(&self, kind: EntryKind, name: String) -> Result<LocatedEntry, SiteError> {
        if self.entries.contains(&name) {
            Ok(LocatedEntry { kind, name })
        } else {
            Err(SiteError::EntryNotFound { entry: kind, name })
        }
    }

    /// Reads a located entry fully and decodes it as UTF-8 (lossy).
    ///
    /// The entry stream is consumed and closed before returning.
    pub fn read_to_string(&mut self, entry: &LocatedEntry) -> Result<String, SiteError> {
        let read_err = |source: io::Error| SiteError::EntryRead {
            entry: entry.kind,
            name: entry.name.clone(),
            source,
        };

        let mut file = self
            .zip
            .by_name(&entry.name)
            .map_err(|e| read_err(zip_to_io(e)))?;
        let mut buf = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
        file.read_to_end(&mut buf).map_err(read_err)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn zip_to_io(err: ZipError) -> io::Error {
    match err {
        ZipError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}
