//! Filesystem adapter rooted at a project directory.

mod server_registry_file;
mod stack_state_file;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;

/// Adapter implementing the registry and state ports on a project's files.
#[derive(Debug, Clone)]
pub struct LocalProjectAdapter {
    root: PathBuf,
    global_registry: Option<PathBuf>,
}

impl LocalProjectAdapter {
    /// Create an adapter for `root` without a user-level registry layer.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), global_registry: None }
    }

    /// Read the user-level registry layer from `path` as well.
    pub fn with_global_registry(mut self, path: Option<PathBuf>) -> Self {
        self.global_registry = path;
        self
    }
}

/// Write through a sibling temp file and rename over the target.
fn write_replacing(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Read a file's bytes, mapping "not found" to `None`.
///
/// Content is not decoded here so callers can treat bad encodings as
/// undecodable documents rather than I/O failures.
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, AppError> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}
