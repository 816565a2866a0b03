//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against a project directory.

use crate::adapters::assets::EmbeddedCatalog;
use crate::adapters::local_project::LocalProjectAdapter;
use crate::app::config::RuntimeConfig;
use crate::app::{
    AppContext,
    commands::{registry, stack},
};
use crate::domain::{EnvValues, ServerPending};

pub use crate::app::commands::registry::RegistryEntry;
pub use crate::app::commands::stack::{
    DefaultSummary, DefaultsOutcome, EnvVarInfo, PresetOutcome, PresetStackResult, PresetSummary,
    ServerDetail, StackDetail, StackOutcome, StackStatus, StackSummary,
};
pub use crate::domain::{AppError, PendingEnv};

type ProjectContext = AppContext<'static, LocalProjectAdapter, LocalProjectAdapter>;

fn project_adapter(config: &RuntimeConfig) -> LocalProjectAdapter {
    LocalProjectAdapter::new(&config.project_root)
        .with_global_registry(config.global_registry.clone())
}

/// Create an `AppContext` for the configured project.
fn create_context(config: &RuntimeConfig) -> Result<ProjectContext, AppError> {
    let catalog = EmbeddedCatalog::shared()?;
    let adapter = project_adapter(config);
    Ok(AppContext::new(catalog, adapter.clone(), adapter))
}

// =============================================================================
// Configuration API
// =============================================================================

/// Register the default servers and mark them configured.
pub fn init(config: &RuntimeConfig) -> Result<DefaultsOutcome, AppError> {
    stack::defaults::execute(&create_context(config)?)
}

/// Apply one catalog stack with the supplied variable values.
pub fn apply_stack(
    config: &RuntimeConfig,
    stack_name: &str,
    values: &EnvValues,
) -> Result<StackOutcome, AppError> {
    stack::apply::execute(&create_context(config)?, stack_name, values)
}

/// Apply every stack of a preset in order.
pub fn apply_preset(
    config: &RuntimeConfig,
    preset_name: &str,
    values: &EnvValues,
) -> Result<PresetOutcome, AppError> {
    stack::preset::execute(&create_context(config)?, preset_name, values)
}

/// Supply env values for a server registered by this tool.
pub fn update_server_env(
    config: &RuntimeConfig,
    server_name: &str,
    values: &EnvValues,
) -> Result<(), AppError> {
    stack::env_update::execute(&create_context(config)?, server_name, values)
}

/// Variables to prompt for when configuring a server interactively.
pub fn prompt_targets(config: &RuntimeConfig, server_name: &str) -> Result<ServerPending, AppError> {
    stack::env_update::prompt_targets(&create_context(config)?, server_name)
}

// =============================================================================
// State Query API
// =============================================================================

pub fn pending_env(config: &RuntimeConfig) -> Result<PendingEnv, AppError> {
    stack::status::pending_env(&project_adapter(config))
}

pub fn configured_stacks(config: &RuntimeConfig) -> Result<Vec<String>, AppError> {
    stack::status::configured_stacks(&project_adapter(config))
}

pub fn defaults_configured(config: &RuntimeConfig) -> Result<bool, AppError> {
    stack::status::defaults_configured(&project_adapter(config))
}

pub fn stack_status(config: &RuntimeConfig) -> Result<StackStatus, AppError> {
    stack::status::stack_status(&project_adapter(config))
}

/// Every server across the registry layers, sorted by name.
pub fn registry_servers(config: &RuntimeConfig) -> Result<Vec<RegistryEntry>, AppError> {
    registry::list(&project_adapter(config))
}

// =============================================================================
// Catalog API
// =============================================================================

pub fn list_stacks() -> Result<Vec<StackSummary>, AppError> {
    Ok(stack::list::list_stacks(EmbeddedCatalog::shared()?))
}

pub fn list_presets() -> Result<Vec<PresetSummary>, AppError> {
    Ok(stack::list::list_presets(EmbeddedCatalog::shared()?))
}

pub fn list_defaults() -> Result<Vec<DefaultSummary>, AppError> {
    Ok(stack::list::list_defaults(EmbeddedCatalog::shared()?))
}

pub fn stack_info(stack_name: &str) -> Result<StackDetail, AppError> {
    stack::list::stack_detail(EmbeddedCatalog::shared()?, stack_name)
}

/// Variables declared by a stack's servers, tagged with the server name.
pub fn required_env_vars(stack_name: &str) -> Result<Vec<(String, EnvVarInfo)>, AppError> {
    Ok(stack::list::stack_env_vars(EmbeddedCatalog::shared()?, stack_name))
}
