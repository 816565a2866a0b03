//! State queries over the persisted stack state.

use crate::domain::{AppError, PendingEnv};
use crate::ports::StackStateStore;

/// Snapshot used by `stack show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackStatus {
    pub configured_stacks: Vec<String>,
    pub pending_env: PendingEnv,
    pub defaults_configured: bool,
}

impl StackStatus {
    pub fn has_pending(&self) -> bool {
        !self.pending_env.is_empty()
    }
}

pub fn pending_env(store: &impl StackStateStore) -> Result<PendingEnv, AppError> {
    Ok(store.load()?.pending_env)
}

/// Configured stack names in the order they were first applied.
pub fn configured_stacks(store: &impl StackStateStore) -> Result<Vec<String>, AppError> {
    Ok(store.load()?.configured_stacks)
}

pub fn defaults_configured(store: &impl StackStateStore) -> Result<bool, AppError> {
    Ok(store.load()?.defaults_configured)
}

pub fn stack_status(store: &impl StackStateStore) -> Result<StackStatus, AppError> {
    let state = store.load()?;
    Ok(StackStatus {
        configured_stacks: state.configured_stacks,
        pending_env: state.pending_env,
        defaults_configured: state.defaults_configured,
    })
}
