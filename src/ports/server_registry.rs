//! Server registry port definition.
//!
//! The registry stores the final launch specs and is supervised elsewhere.
//! This tool writes only to its own layer; other layers are read for display.

use std::collections::BTreeMap;

use crate::domain::{AppError, EnvValues, RegisteredServer, ServerLaunchSpec};

/// Port for the external server registry.
pub trait ServerRegistry {
    /// Insert or overwrite a server in this tool's own layer.
    fn add_server(&self, name: &str, spec: &ServerLaunchSpec) -> Result<(), AppError>;

    /// Merged view across all layers, each entry tagged with its source.
    fn get_all(&self) -> Result<BTreeMap<String, RegisteredServer>, AppError>;

    /// Whether the server exists in this tool's own layer.
    fn exists(&self, name: &str) -> Result<bool, AppError>;

    /// Merge values into an own-layer server's env map.
    ///
    /// Returns `false` without writing when the server is absent.
    fn merge_env(&self, name: &str, values: &EnvValues) -> Result<bool, AppError>;
}
