//! agent-stack: resolve tech-stack catalog entries into MCP server
//! registrations and track the configuration still pending.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    DefaultSummary, DefaultsOutcome, EnvVarInfo, PresetOutcome, PresetStackResult, PresetSummary,
    RegistryEntry, ServerDetail, StackDetail, StackOutcome, StackStatus, StackSummary,
};
pub use app::config::RuntimeConfig;
pub use domain::{AppError, EnvValues, PendingEntry, PendingEnv, PersistedStackState, SourceTag};
