//! Launch specifications handed to the server registry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Command, arguments, and environment of one registered server.
///
/// Fields this tool does not model (for example `type` or `url` written by
/// other tools) are kept in `extra` so rewriting a registry file keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerLaunchSpec {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ServerLaunchSpec {
    pub fn new(
        command: impl Into<String>,
        args: Vec<String>,
        env: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self { command: command.into(), args, env, extra: BTreeMap::new() }
    }

    /// Merge values into the env map, creating it when absent.
    pub fn merge_env(&mut self, values: &BTreeMap<String, String>) {
        let env = self.env.get_or_insert_with(BTreeMap::new);
        for (name, value) in values {
            env.insert(name.clone(), value.clone());
        }
    }

    /// `command arg1 arg2 ...` for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Which configuration layer a registered server came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceTag {
    /// This tool's own `.agent/mcp.json`.
    Agent,
    /// The project's `.mcp.json`.
    Project,
    /// The user-level registry file.
    Global,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Agent => "agent",
            SourceTag::Project => "project",
            SourceTag::Global => "global",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A server visible in the merged registry view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredServer {
    pub spec: ServerLaunchSpec,
    pub source: SourceTag,
}
