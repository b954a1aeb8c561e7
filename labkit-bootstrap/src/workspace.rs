//! Destination directory resolution.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{io_err, BootstrapError};

/// Where a bootstrap run materialises its environment.
///
/// A temporary destination is removed with all of its contents when the
/// value drops, which covers every exit path of a run: success, a failing
/// command, or an error after allocation.
#[derive(Debug)]
pub enum Workspace {
    /// Caller-chosen directory that outlives the run.
    Explicit(PathBuf),
    /// Auto-allocated scratch directory, removed on drop.
    Temporary(TempDir),
}

impl Workspace {
    /// Resolve the destination. Runs before any external command is issued.
    ///
    /// An explicit directory is created (with parents) if absent. If it
    /// already exists it must be empty, hidden entries included, unless
    /// `allow_existing` lifts the check. `None` allocates a temporary
    /// directory.
    pub fn resolve(outdir: Option<&Path>, allow_existing: bool) -> Result<Self, BootstrapError> {
        match outdir {
            Some(dir) => {
                if dir.exists() {
                    if !allow_existing && !is_empty_dir(dir)? {
                        return Err(BootstrapError::DestinationOccupied {
                            path: dir.to_path_buf(),
                        });
                    }
                } else {
                    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
                }
                Ok(Workspace::Explicit(dir.to_path_buf()))
            }
            None => {
                let tmp = TempDir::new().map_err(|e| io_err("temporary directory", e))?;
                tracing::debug!("allocated temporary destination {}", tmp.path().display());
                Ok(Workspace::Temporary(tmp))
            }
        }
    }

    /// The directory all commands run in.
    pub fn path(&self) -> &Path {
        match self {
            Workspace::Explicit(path) => path,
            Workspace::Temporary(tmp) => tmp.path(),
        }
    }

    /// True when the directory survives the run.
    pub fn is_kept(&self) -> bool {
        matches!(self, Workspace::Explicit(_))
    }
}

fn is_empty_dir(dir: &Path) -> Result<bool, BootstrapError> {
    let mut entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    Ok(entries.next().is_none())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
