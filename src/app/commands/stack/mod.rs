//! Stack use-cases: apply stacks and presets, update env, configure defaults,
//! and query the catalog and persisted state.

pub mod apply;
pub mod defaults;
pub mod env_update;
pub mod list;
pub mod preset;
pub mod status;

pub use apply::StackOutcome;
pub use defaults::DefaultsOutcome;
pub use list::{DefaultSummary, EnvVarInfo, PresetSummary, ServerDetail, StackDetail, StackSummary};
pub use preset::{PresetOutcome, PresetStackResult};
pub use status::StackStatus;
