//! Runtime configuration resolved from CLI flags and the environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, paths};

/// Overrides the location of the user-level registry file. An empty value
/// disables that layer.
pub const GLOBAL_REGISTRY_ENV: &str = "AGENT_STACK_GLOBAL_MCP";

/// Where commands read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Project directory holding `.agent/` and `.mcp.json`.
    pub project_root: PathBuf,
    /// User-level registry file, when one can be located.
    pub global_registry: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Resolve from an optional `--path` flag, falling back to the current directory.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, AppError> {
        let project_root = match path {
            Some(path) => path,
            None => env::current_dir()?,
        };
        if !project_root.is_dir() {
            return Err(AppError::config_error(format!(
                "Project path is not a directory: {}",
                project_root.display()
            )));
        }

        Ok(Self {
            project_root,
            global_registry: global_registry_path(
                env::var_os(GLOBAL_REGISTRY_ENV),
                env::var_os("HOME"),
            ),
        })
    }

    /// Configuration rooted at `root` with no user-level registry layer.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { project_root: root.into(), global_registry: None }
    }
}

fn global_registry_path(overridden: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    match overridden {
        Some(value) if value.is_empty() => None,
        Some(value) => Some(PathBuf::from(value)),
        None => home.filter(|h| !h.is_empty()).map(|h| paths::global_registry(Path::new(&h))),
    }
}
