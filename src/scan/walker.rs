//! Recursive directory walk filtered by file extension
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Collect every non-directory entry below `root` whose extension equals
/// `extension` exactly (no case folding). Paths come back sorted.
///
/// Symlinks are reported as files and never followed.
pub fn walk_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk_into(root, OsStr::new(extension), &mut found)?;
    found.sort();
    debug!(
        root = %root.display(),
        extension,
        count = found.len(),
        "Directory walk complete"
    );
    Ok(found)
}

fn walk_into(dir: &Path, extension: &OsStr, found: &mut Vec<PathBuf>) -> Result<()> {
    let walk_err = |source| ScanError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(walk_err)? {
        let entry = entry.map_err(walk_err)?;
        let file_type = entry.file_type().map_err(walk_err)?;
        let path = entry.path();

        if file_type.is_dir() {
            walk_into(&path, extension, found)?;
        } else if path.extension() == Some(extension) {
            found.push(path);
        }
    }

    Ok(())
}
