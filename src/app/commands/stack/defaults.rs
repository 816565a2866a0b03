//! Default servers configurator.

use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ServerRegistry, StackStateStore};

/// Outcome of configuring the default servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsOutcome {
    pub servers_added: Vec<String>,
}

/// Register every default server, overwriting prior registrations, and mark
/// the defaults as configured.
pub fn execute<R, S>(ctx: &AppContext<'_, R, S>) -> Result<DefaultsOutcome, AppError>
where
    R: ServerRegistry,
    S: StackStateStore,
{
    let mut servers_added = Vec::new();
    for server in ctx.catalog().defaults() {
        ctx.registry().add_server(&server.name, &server.launch_spec())?;
        servers_added.push(server.name.clone());
    }

    let mut state = ctx.state().load()?;
    state.defaults_configured = true;
    ctx.state().save(&state)?;

    info!(servers = servers_added.len(), "configured default servers");
    Ok(DefaultsOutcome { servers_added })
}
