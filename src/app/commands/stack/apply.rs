//! Stack configurator - registers one catalog stack's servers.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, EnvValues, PendingEnv};
use crate::ports::{ServerRegistry, StackStateStore};

/// Outcome of applying a single stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutcome {
    pub stack: String,
    /// Servers registered, in catalog order.
    pub servers_added: Vec<String>,
    /// Required variables still missing, per server.
    pub pending_env: PendingEnv,
}

/// Apply one stack: resolve each server, register it, and record pending variables.
///
/// An unknown stack fails before anything is registered or persisted.
/// Re-applying a stack overwrites its registrations and replaces the pending
/// map of every server that still has missing variables.
pub fn execute<R, S>(
    ctx: &AppContext<'_, R, S>,
    stack_name: &str,
    values: &EnvValues,
) -> Result<StackOutcome, AppError>
where
    R: ServerRegistry,
    S: StackStateStore,
{
    let stack = ctx.catalog().lookup_stack(stack_name)?;

    let mut servers_added = Vec::with_capacity(stack.servers.len());
    let mut pending_env = PendingEnv::new();

    for server in &stack.servers {
        let resolved = server.resolve(values);
        ctx.registry().add_server(&server.name, &resolved.spec)?;
        debug!(
            stack = stack_name,
            server = %server.name,
            pending = resolved.pending.len(),
            "resolved server"
        );

        servers_added.push(server.name.clone());
        if !resolved.pending.is_empty() {
            pending_env.insert(server.name.clone(), resolved.pending);
        }
    }

    let mut state = ctx.state().load()?;
    state.record_stack(stack_name);
    state.replace_pending(&pending_env);
    ctx.state().save(&state)?;

    info!(stack = stack_name, servers = servers_added.len(), "applied stack");
    Ok(StackOutcome { stack: stack_name.to_string(), servers_added, pending_env })
}
