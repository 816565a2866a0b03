//! Immutable catalog of stacks, presets, and default servers.

mod definitions;

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::AppError;
use crate::domain::identifiers::validation::{validate_catalog_name, validate_env_var_name};

pub use definitions::{
    DefaultServer, EnvVarSpec, Preset, ResolvedServer, ServerDefinition, StackDefinition,
};

/// An env spec together with the server that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEnvVar<'a> {
    pub server: &'a str,
    pub spec: &'a EnvVarSpec,
}

/// Read-only lookup of catalog definitions by exact name.
#[derive(Debug, Clone)]
pub struct Catalog {
    stacks: BTreeMap<String, StackDefinition>,
    presets: Vec<Preset>,
    defaults: Vec<DefaultServer>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid names and duplicates.
    ///
    /// Preset references to absent stacks are accepted here; applying such a
    /// preset reports the miss per stack.
    pub fn new(
        stacks: Vec<StackDefinition>,
        presets: Vec<Preset>,
        defaults: Vec<DefaultServer>,
    ) -> Result<Self, AppError> {
        let mut by_name = BTreeMap::new();
        for stack in stacks {
            check_name(&stack.name, &stack.name)?;
            let mut servers = BTreeSet::new();
            for server in &stack.servers {
                check_name(&stack.name, &server.name)?;
                if !servers.insert(server.name.as_str()) {
                    return Err(invalid(&stack.name, format!("duplicate server '{}'", server.name)));
                }
                let mut vars = BTreeSet::new();
                for spec in &server.env_specs {
                    if !validate_env_var_name(&spec.name) {
                        return Err(invalid(
                            &stack.name,
                            format!("invalid environment variable name '{}'", spec.name),
                        ));
                    }
                    if !vars.insert(spec.name.as_str()) {
                        return Err(invalid(
                            &stack.name,
                            format!("duplicate environment variable '{}'", spec.name),
                        ));
                    }
                }
            }
            if by_name.contains_key(&stack.name) {
                return Err(invalid(&stack.name, "duplicate stack name"));
            }
            by_name.insert(stack.name.clone(), stack);
        }

        let mut preset_names = BTreeSet::new();
        for preset in &presets {
            check_name(&preset.name, &preset.name)?;
            if !preset_names.insert(preset.name.as_str()) {
                return Err(invalid(&preset.name, "duplicate preset name"));
            }
        }

        let mut default_names = BTreeSet::new();
        for server in &defaults {
            check_name(&server.name, &server.name)?;
            if !default_names.insert(server.name.as_str()) {
                return Err(invalid(&server.name, "duplicate default server"));
            }
        }

        Ok(Self { stacks: by_name, presets, defaults })
    }

    pub fn lookup_stack(&self, name: &str) -> Result<&StackDefinition, AppError> {
        self.stacks.get(name).ok_or_else(|| AppError::UnknownStack(name.to_string()))
    }

    pub fn lookup_preset(&self, name: &str) -> Result<&Preset, AppError> {
        self.presets
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| AppError::UnknownPreset(name.to_string()))
    }

    /// All stacks sorted by name.
    pub fn stacks(&self) -> impl Iterator<Item = &StackDefinition> {
        self.stacks.values()
    }

    /// Presets in declaration order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn defaults(&self) -> &[DefaultServer] {
        &self.defaults
    }

    /// Every env spec declared by the stack's servers. Empty for unknown stacks.
    pub fn required_env_vars(&self, stack_name: &str) -> Vec<StackEnvVar<'_>> {
        let Some(stack) = self.stacks.get(stack_name) else {
            return Vec::new();
        };
        stack
            .servers
            .iter()
            .flat_map(|server| {
                server
                    .env_specs
                    .iter()
                    .map(move |spec| StackEnvVar { server: server.name.as_str(), spec })
            })
            .collect()
    }

    /// First server with this name across all stacks, in stack-name order.
    pub fn find_server(&self, server_name: &str) -> Option<&ServerDefinition> {
        self.stacks.values().flat_map(|stack| stack.servers.iter()).find(|s| s.name == server_name)
    }
}

fn check_name(entry: &str, name: &str) -> Result<(), AppError> {
    if validate_catalog_name(name) {
        Ok(())
    } else {
        Err(invalid(entry, format!("invalid name '{}'", name)))
    }
}

fn invalid(entry: &str, reason: impl Into<String>) -> AppError {
    AppError::InvalidCatalog { entry: entry.to_string(), reason: reason.into() }
}
