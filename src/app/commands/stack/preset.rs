//! Preset configurator - applies a preset's stacks in declared order.

use tracing::{info, warn};

use super::apply::{self, StackOutcome};
use crate::app::AppContext;
use crate::domain::{AppError, EnvValues, PendingEnv};
use crate::ports::{ServerRegistry, StackStateStore};

/// Per-stack result inside a preset application.
#[derive(Debug)]
pub struct PresetStackResult {
    pub stack: String,
    pub result: Result<StackOutcome, AppError>,
}

/// Outcome of applying a preset.
#[derive(Debug)]
pub struct PresetOutcome {
    pub preset: String,
    /// One entry per declared stack, in declared order.
    pub stacks: Vec<PresetStackResult>,
    /// Pending variables across all stacks; later stacks replace earlier
    /// entries for the same server.
    pub all_pending_env: PendingEnv,
}

impl PresetOutcome {
    /// Servers registered by the stacks that applied successfully.
    pub fn servers_added(&self) -> Vec<&str> {
        self.stacks
            .iter()
            .filter_map(|entry| entry.result.as_ref().ok())
            .flat_map(|outcome| outcome.servers_added.iter().map(String::as_str))
            .collect()
    }

    /// Stacks that could not be applied.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &AppError)> {
        self.stacks
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|e| (entry.stack.as_str(), e)))
    }
}

/// Apply every stack of a preset.
///
/// An unknown preset fails before any stack is applied. A stack missing from
/// the catalog is recorded in its own entry and the remaining stacks still
/// apply; I/O failures abort.
pub fn execute<R, S>(
    ctx: &AppContext<'_, R, S>,
    preset_name: &str,
    values: &EnvValues,
) -> Result<PresetOutcome, AppError>
where
    R: ServerRegistry,
    S: StackStateStore,
{
    let preset = ctx.catalog().lookup_preset(preset_name)?;

    let mut stacks = Vec::with_capacity(preset.stack_names.len());
    let mut all_pending_env = PendingEnv::new();

    for stack_name in &preset.stack_names {
        let result = match apply::execute(ctx, stack_name, values) {
            Ok(outcome) => {
                for (server, vars) in &outcome.pending_env {
                    all_pending_env.insert(server.clone(), vars.clone());
                }
                Ok(outcome)
            }
            Err(err @ AppError::UnknownStack(_)) => {
                warn!(preset = preset_name, stack = %stack_name, "preset references unknown stack");
                Err(err)
            }
            Err(err) => return Err(err),
        };
        stacks.push(PresetStackResult { stack: stack_name.clone(), result });
    }

    info!(preset = preset_name, stacks = stacks.len(), "applied preset");
    Ok(PresetOutcome { preset: preset_name.to_string(), stacks, all_pending_env })
}
