//! Scans the target directory for regular files and collects stat metadata.

use crate::error::ChunkError;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Path relative to the scan root, forward slashes. Equals the file name
    /// in flat mode.
    pub rel_name: String,
    pub size: u64,
    pub mtime: i64,
}

impl ScannedFile {
    pub fn file_name(&self) -> &str {
        self.rel_name
            .rsplit('/')
            .next()
            .unwrap_or(self.rel_name.as_str())
    }
}

/// Enumerates regular files under `root`, one level deep unless `recursive`.
/// Entries that error mid-walk are skipped; results come back sorted by
/// lowercase file name so chunk output is stable across runs.
pub fn scan(root: &Path, recursive: bool) -> Result<Vec<ScannedFile>, ChunkError> {
    // Surface an unreadable root up front instead of silently yielding zero files.
    std::fs::read_dir(root).map_err(|e| ChunkError::io(root, e))?;

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(root).max_depth(max_depth).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                debug!("skipping {:?}: {err}", entry.path());
                continue;
            }
        };
        let mtime = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        files.push(ScannedFile {
            path: entry.path().to_path_buf(),
            rel_name: relative_name(root, entry.path()),
            size: meta.len(),
            mtime,
        });
    }
    files.sort_by_key(|f| f.file_name().to_lowercase());
    Ok(files)
}

fn relative_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
