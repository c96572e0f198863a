//! Atomic file replacement through a uniquely named sibling temp file.

use std::io::{self, Write};
use std::path::Path;

/// Prefix of in-flight temp files. `%` followed by a non-hex character never
/// appears in an encoded key, so a temp file cannot shadow a summary.
pub const TEMP_PREFIX: &str = ".%tmp-";

/// Writes `data` to `final_path` so readers see either the old file or the
/// complete new one, never a partial write.
///
/// Data goes to a fresh temp file in the same directory, is synced, and is
/// renamed over `final_path`. An unpersisted temp file is removed on drop.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match final_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(final_path).map_err(|e| e.error)?;
    Ok(())
}
