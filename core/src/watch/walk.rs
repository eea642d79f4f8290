use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::WatchError;

use super::filter::is_hidden_dir_name;

/// Every directory reachable from `root`, root included, skipping hidden
/// directories and everything beneath them. Symlinks are not followed.
pub fn collect_watch_dirs(root: &Path) -> Result<Vec<PathBuf>, WatchError> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_dir_name(e.file_name()));

    let mut dirs = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| WatchError::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    tracing::debug!(
        target: "slothtest.watch",
        root = %root.display(),
        count = dirs.len(),
        "directories collected"
    );
    Ok(dirs)
}
