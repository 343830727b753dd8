//! Relocating settled invoices into the paid directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("Cannot create target directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Refusing to overwrite {to} with {from}")]
    DestinationExists { from: PathBuf, to: PathBuf },

    #[error("Cannot move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Copied {from} to {to} but cannot remove the source: {source}")]
    RemoveSource {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Destination for a settled invoice: the paid directory plus the bare file name
pub fn destination_for(paid_dir: &Path, file_name: &str) -> PathBuf {
    paid_dir.join(file_name)
}

/// Move `from` to `to`, creating the parents of `to` first.
///
/// Never replaces an existing file at `to`. Falls back to copy + remove
/// when the two paths live on different filesystems.
pub fn move_file(from: &Path, to: &Path) -> Result<(), MoveError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|source| MoveError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // symlink_metadata so a dangling link at `to` also counts as taken
    if fs::symlink_metadata(to).is_ok() {
        return Err(MoveError::DestinationExists {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    match fs::rename(from, to) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %from.display(), to = %to.display(), "Cross-device move, copying");
            copy_then_remove(from, to)?;
        }
        Err(source) => {
            return Err(MoveError::Rename {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            });
        }
    }

    debug!(from = %from.display(), to = %to.display(), "File moved");
    Ok(())
}

/// Copy `from` to the free path `to`, then delete `from`.
///
/// A failed copy removes whatever part of `to` was written.
fn copy_then_remove(from: &Path, to: &Path) -> Result<(), MoveError> {
    if let Err(source) = fs::copy(from, to) {
        match fs::remove_file(to) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                warn!(path = %to.display(), error = %err, "Cannot remove partial copy");
            }
            _ => {}
        }
        return Err(MoveError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        });
    }

    fs::remove_file(from).map_err(|source| MoveError::RemoveSource {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
