//! Registry listing - the merged, source-tagged view of every layer.

use crate::domain::{AppError, SourceTag};
use crate::ports::ServerRegistry;

/// One server as seen across all registry layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    pub source: SourceTag,
    pub command_line: String,
    /// Names of the env variables set on the server, values withheld.
    pub env_names: Vec<String>,
}

/// All registered servers sorted by name.
pub fn list(registry: &impl ServerRegistry) -> Result<Vec<RegistryEntry>, AppError> {
    Ok(registry
        .get_all()?
        .into_iter()
        .map(|(name, server)| RegistryEntry {
            name,
            source: server.source,
            command_line: server.spec.command_line(),
            env_names: server.spec.env.map(|env| env.into_keys().collect()).unwrap_or_default(),
        })
        .collect())
}
