//! Env updater - supplies previously pending variables for a registered server.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, EnvValues, ServerPending};
use crate::ports::{ServerRegistry, StackStateStore};

/// Merge `values` into the server's registered env and prune the matching
/// pending entries.
///
/// Fails with `UnknownServer` when the server is not in this tool's registry
/// layer; the stack state is then left untouched. The registry is written
/// before the stack state, and the two writes are independent.
pub fn execute<R, S>(
    ctx: &AppContext<'_, R, S>,
    server_name: &str,
    values: &EnvValues,
) -> Result<(), AppError>
where
    R: ServerRegistry,
    S: StackStateStore,
{
    if !ctx.registry().exists(server_name)? {
        return Err(AppError::UnknownServer(server_name.to_string()));
    }
    if !ctx.registry().merge_env(server_name, values)? {
        return Err(AppError::UnknownServer(server_name.to_string()));
    }

    let mut state = ctx.state().load()?;
    if state.resolve_pending(server_name, values.keys().map(String::as_str)) {
        ctx.state().save(&state)?;
    }

    info!(server = server_name, count = values.len(), "updated server env");
    Ok(())
}

/// Variables to ask for when configuring a server interactively.
///
/// The server's pending entries when there are any, otherwise every required
/// variable the catalog declares for a server of that name.
pub fn prompt_targets<R, S>(
    ctx: &AppContext<'_, R, S>,
    server_name: &str,
) -> Result<ServerPending, AppError>
where
    R: ServerRegistry,
    S: StackStateStore,
{
    let mut state = ctx.state().load()?;
    if let Some(pending) = state.pending_env.remove(server_name) {
        return Ok(pending);
    }
    Ok(ctx.catalog().find_server(server_name).map(|s| s.required_entries()).unwrap_or_default())
}
