pub mod catalog;
pub mod error;
pub mod identifiers;
pub mod paths;
pub mod placeholder;
pub mod registration;
pub mod stack_state;

use std::collections::BTreeMap;

pub use catalog::{
    Catalog, DefaultServer, EnvVarSpec, Preset, ResolvedServer, ServerDefinition,
    StackDefinition, StackEnvVar,
};
pub use error::AppError;
pub use registration::{RegisteredServer, ServerLaunchSpec, SourceTag};
pub use stack_state::{PendingEntry, PendingEnv, PersistedStackState, ServerPending};

/// User-supplied variable values keyed by variable name.
pub type EnvValues = BTreeMap<String, String>;
