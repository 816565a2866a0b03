//! `ServerRegistry` implementation for `LocalProjectAdapter`.
//!
//! Layers, lowest precedence first: global, project, agent. Only the agent
//! layer (`.agent/mcp.json`) is ever written.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{AppError, EnvValues, RegisteredServer, ServerLaunchSpec, SourceTag, paths};
use crate::ports::ServerRegistry;

use super::{LocalProjectAdapter, read_optional, write_replacing};

/// On-disk registry document. Keys other than `mcpServers` are carried through.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryDocument {
    #[serde(rename = "mcpServers", default)]
    servers: BTreeMap<String, ServerLaunchSpec>,
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

impl LocalProjectAdapter {
    fn agent_registry_path(&self) -> PathBuf {
        paths::agent_registry(&self.root)
    }

    fn read_agent_layer(&self) -> Result<RegistryDocument, AppError> {
        let path = self.agent_registry_path();
        let Some(content) = read_optional(&path)? else {
            return Ok(RegistryDocument::default());
        };
        serde_json::from_slice(&content).map_err(|err| AppError::ParseError {
            what: path.display().to_string(),
            details: err.to_string(),
        })
    }

    fn write_agent_layer(&self, document: &RegistryDocument) -> Result<(), AppError> {
        write_replacing(&self.agent_registry_path(), &serde_json::to_string_pretty(document)?)
    }

    fn layers(&self) -> Vec<(SourceTag, PathBuf)> {
        let mut layers = Vec::new();
        if let Some(global) = &self.global_registry {
            layers.push((SourceTag::Global, global.clone()));
        }
        layers.push((SourceTag::Project, paths::project_registry(&self.root)));
        layers
    }
}

fn read_foreign_layer(path: &Path) -> Result<Option<RegistryDocument>, AppError> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };
    match serde_json::from_slice(&content) {
        Ok(document) => Ok(Some(document)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping undecodable registry layer");
            Ok(None)
        }
    }
}

impl ServerRegistry for LocalProjectAdapter {
    fn add_server(&self, name: &str, spec: &ServerLaunchSpec) -> Result<(), AppError> {
        let mut document = self.read_agent_layer()?;
        document.servers.insert(name.to_string(), spec.clone());
        self.write_agent_layer(&document)?;
        debug!(server = name, command = %spec.command_line(), "registered server");
        Ok(())
    }

    fn get_all(&self) -> Result<BTreeMap<String, RegisteredServer>, AppError> {
        let mut merged = BTreeMap::new();

        for (source, path) in self.layers() {
            if let Some(document) = read_foreign_layer(&path)? {
                for (name, spec) in document.servers {
                    merged.insert(name, RegisteredServer { spec, source });
                }
            }
        }
        for (name, spec) in self.read_agent_layer()?.servers {
            merged.insert(name, RegisteredServer { spec, source: SourceTag::Agent });
        }

        Ok(merged)
    }

    fn exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.read_agent_layer()?.servers.contains_key(name))
    }

    fn merge_env(&self, name: &str, values: &EnvValues) -> Result<bool, AppError> {
        let mut document = self.read_agent_layer()?;
        let Some(spec) = document.servers.get_mut(name) else {
            return Ok(false);
        };
        spec.merge_env(values);
        self.write_agent_layer(&document)?;
        debug!(server = name, count = values.len(), "merged env values");
        Ok(true)
    }
}
