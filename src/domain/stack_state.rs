//! Persisted resolution state: configured stacks, pending variables, defaults flag.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Metadata for a required variable that has not been supplied yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
}

/// Pending variables of one server, keyed by variable name.
pub type ServerPending = BTreeMap<String, PendingEntry>;

/// Pending variables keyed by server name.
pub type PendingEnv = BTreeMap<String, ServerPending>;

/// Contents of `.agent/stack.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedStackState {
    /// Configured stack names in insertion order, each at most once.
    #[serde(rename = "stacks", default)]
    pub configured_stacks: Vec<String>,
    #[serde(default)]
    pub pending_env: PendingEnv,
    #[serde(default)]
    pub defaults_configured: bool,
}

impl PersistedStackState {
    /// Decode the persisted JSON form.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        Self::from_slice(content.as_bytes())
    }

    /// Decode raw bytes. Only a JSON object is accepted; the sequence form
    /// serde would otherwise map onto the fields is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("stack state must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_configured(&self, stack_name: &str) -> bool {
        self.configured_stacks.iter().any(|name| name == stack_name)
    }

    /// Append the stack unless already present. Returns whether it was added.
    pub fn record_stack(&mut self, stack_name: &str) -> bool {
        if self.is_configured(stack_name) {
            return false;
        }
        self.configured_stacks.push(stack_name.to_string());
        true
    }

    /// Replace each listed server's pending map with the new one.
    ///
    /// Servers absent from `pending` keep whatever was recorded before.
    pub fn replace_pending(&mut self, pending: &PendingEnv) {
        for (server, vars) in pending {
            self.pending_env.insert(server.clone(), vars.clone());
        }
    }

    /// Drop the given variables from a server's pending map, removing the
    /// server entirely once nothing is left. Returns whether anything changed.
    pub fn resolve_pending<'a>(
        &mut self,
        server: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        let Some(vars) = self.pending_env.get_mut(server) else {
            return false;
        };

        let before = vars.len();
        for name in names {
            vars.remove(name);
        }
        let changed = vars.len() != before;

        if vars.is_empty() {
            self.pending_env.remove(server);
            return true;
        }
        changed
    }
}
