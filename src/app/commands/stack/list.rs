//! Catalog listing queries - stacks, presets, defaults, and stack detail.

use crate::domain::{AppError, Catalog};

/// Summary of one stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSummary {
    pub name: String,
    pub description: String,
    pub servers: Vec<String>,
}

/// Summary of one preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetSummary {
    pub name: String,
    pub description: String,
    pub stacks: Vec<String>,
}

/// Summary of one default server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSummary {
    pub name: String,
    pub description: String,
    pub command_line: String,
}

/// Detailed information for a stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDetail {
    pub name: String,
    pub description: String,
    pub servers: Vec<ServerDetail>,
}

/// One server of a stack with its launch template and variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDetail {
    pub name: String,
    pub command_line: String,
    pub env_vars: Vec<EnvVarInfo>,
}

/// Environment variable information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarInfo {
    pub name: String,
    pub description: String,
    pub example: String,
    pub required: bool,
}

/// All stacks sorted by name.
pub fn list_stacks(catalog: &Catalog) -> Vec<StackSummary> {
    catalog
        .stacks()
        .map(|stack| StackSummary {
            name: stack.name.clone(),
            description: stack.description.clone(),
            servers: stack.server_names().into_iter().map(String::from).collect(),
        })
        .collect()
}

/// Presets in declaration order.
pub fn list_presets(catalog: &Catalog) -> Vec<PresetSummary> {
    catalog
        .presets()
        .iter()
        .map(|preset| PresetSummary {
            name: preset.name.clone(),
            description: preset.description.clone(),
            stacks: preset.stack_names.clone(),
        })
        .collect()
}

pub fn list_defaults(catalog: &Catalog) -> Vec<DefaultSummary> {
    catalog
        .defaults()
        .iter()
        .map(|server| DefaultSummary {
            name: server.name.clone(),
            description: server.description.clone(),
            command_line: server.launch_spec().command_line(),
        })
        .collect()
}

/// Detail for a single stack, failing with `UnknownStack` on a miss.
pub fn stack_detail(catalog: &Catalog, stack_name: &str) -> Result<StackDetail, AppError> {
    let stack = catalog.lookup_stack(stack_name)?;

    Ok(StackDetail {
        name: stack.name.clone(),
        description: stack.description.clone(),
        servers: stack
            .servers
            .iter()
            .map(|server| ServerDetail {
                name: server.name.clone(),
                command_line: std::iter::once(server.command.as_str())
                    .chain(server.arg_template.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" "),
                env_vars: server
                    .env_specs
                    .iter()
                    .map(|spec| EnvVarInfo {
                        name: spec.name.clone(),
                        description: spec.description.clone(),
                        example: spec.example.clone(),
                        required: spec.required,
                    })
                    .collect(),
            })
            .collect(),
    })
}

/// Every variable the stack's servers declare, tagged with the server name.
/// Empty for unknown stacks.
pub fn stack_env_vars(catalog: &Catalog, stack_name: &str) -> Vec<(String, EnvVarInfo)> {
    catalog
        .required_env_vars(stack_name)
        .into_iter()
        .map(|var| {
            (
                var.server.to_string(),
                EnvVarInfo {
                    name: var.spec.name.clone(),
                    description: var.spec.description.clone(),
                    example: var.spec.example.clone(),
                    required: var.spec.required,
                },
            )
        })
        .collect()
}
