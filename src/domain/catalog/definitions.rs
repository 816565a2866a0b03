//! Catalog entity types: servers, stacks, presets, and always-on defaults.

use std::collections::BTreeMap;

use crate::domain::placeholder;
use crate::domain::registration::ServerLaunchSpec;
use crate::domain::stack_state::{PendingEntry, ServerPending};
use crate::domain::EnvValues;

/// Environment variable specification for a catalog server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarSpec {
    /// Variable name, also usable as a `{NAME}` placeholder in argument templates.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Example value shown to the user.
    pub example: String,
    /// Whether the server cannot work until a value is supplied.
    pub required: bool,
}

/// A launchable server template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDefinition {
    /// Registration name of the server.
    pub name: String,
    /// Executable passed through to the registry unchanged.
    pub command: String,
    /// Argument tokens, possibly containing `{NAME}` placeholders.
    pub arg_template: Vec<String>,
    /// Environment variables the server reads, in declaration order.
    pub env_specs: Vec<EnvVarSpec>,
}

/// Result of resolving a server template against user-supplied values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServer {
    pub spec: ServerLaunchSpec,
    /// Required variables that were not supplied.
    pub pending: ServerPending,
}

impl ServerDefinition {
    /// Resolve arguments and partition env specs into supplied, pending, and dropped.
    ///
    /// A variable present in `values` is copied into the launch env verbatim.
    /// A required variable that is absent becomes pending. An optional absent
    /// variable is dropped.
    pub fn resolve(&self, values: &EnvValues) -> ResolvedServer {
        let args = placeholder::resolve(&self.arg_template, values);

        let mut env = BTreeMap::new();
        let mut pending = ServerPending::new();
        for spec in &self.env_specs {
            if let Some(value) = values.get(&spec.name) {
                env.insert(spec.name.clone(), value.clone());
            } else if spec.required {
                pending.insert(
                    spec.name.clone(),
                    PendingEntry {
                        description: spec.description.clone(),
                        example: spec.example.clone(),
                    },
                );
            }
        }

        ResolvedServer {
            spec: ServerLaunchSpec::new(
                self.command.clone(),
                args,
                if env.is_empty() { None } else { Some(env) },
            ),
            pending,
        }
    }

    /// Required variables as pending entries, regardless of any supplied values.
    pub fn required_entries(&self) -> ServerPending {
        self.env_specs
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| {
                (
                    spec.name.clone(),
                    PendingEntry {
                        description: spec.description.clone(),
                        example: spec.example.clone(),
                    },
                )
            })
            .collect()
    }
}

/// A named bundle of server templates for one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDefinition {
    pub name: String,
    pub description: String,
    /// Servers in catalog order.
    pub servers: Vec<ServerDefinition>,
}

impl StackDefinition {
    /// Server names in catalog order.
    pub fn server_names(&self) -> Vec<&str> {
        self.servers.iter().map(|s| s.name.as_str()).collect()
    }
}

/// A named, ordered bundle of stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub stack_names: Vec<String>,
}

/// A server registered unconditionally by the defaults configurator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultServer {
    pub name: String,
    pub description: String,
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

impl DefaultServer {
    pub fn launch_spec(&self) -> ServerLaunchSpec {
        ServerLaunchSpec::new(
            self.command.clone(),
            self.args.clone(),
            if self.env.is_empty() { None } else { Some(self.env.clone()) },
        )
    }
}
