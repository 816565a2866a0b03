//! Stack command implementation.

use std::io::ErrorKind;

use clap::Subcommand;
use dialoguer::{Error as DialoguerError, Input};
use tracing::warn;

use crate::app::api::{self, PendingEnv};
use crate::app::config::RuntimeConfig;
use crate::domain::{AppError, EnvValues};

#[derive(Subcommand)]
pub enum StackCommands {
    /// List default servers and available tech stacks
    #[clap(visible_alias = "ls")]
    List,
    /// List stack presets
    Presets,
    /// Add tech stacks and register their MCP servers
    #[clap(visible_alias = "a")]
    Add {
        /// Stack names, applied in order
        #[arg(required = true)]
        stacks: Vec<String>,
        /// Environment variable (KEY=VALUE)
        #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,
    },
    /// Apply every stack of a preset
    Preset {
        /// Preset name
        name: String,
        /// Environment variable (KEY=VALUE)
        #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,
    },
    /// Set environment variables for a registered server
    #[clap(visible_alias = "c")]
    Configure {
        /// Server name
        server: String,
        /// Environment variable (KEY=VALUE)
        #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,
        /// Prompt for each pending variable
        #[arg(short = 'i', long)]
        interactive: bool,
    },
    /// Show variables that still need values
    Pending,
    /// Show the current stack configuration
    Show,
    /// Show details about a tech stack
    Info {
        /// Stack name
        stack: String,
    },
}

pub fn run_stack(config: &RuntimeConfig, command: StackCommands) -> Result<(), AppError> {
    match command {
        StackCommands::List => run_stack_list(),
        StackCommands::Presets => run_stack_presets(),
        StackCommands::Add { stacks, env } => run_stack_add(config, &stacks, &parse_env_args(&env)),
        StackCommands::Preset { name, env } => {
            run_stack_preset(config, &name, &parse_env_args(&env))
        }
        StackCommands::Configure { server, env, interactive } => {
            if interactive {
                run_stack_configure_interactive(config, &server)
            } else {
                run_stack_configure(config, &server, &parse_env_args(&env))
            }
        }
        StackCommands::Pending => run_stack_pending(config),
        StackCommands::Show => run_stack_show(config),
        StackCommands::Info { stack } => run_stack_info(&stack),
    }
}

/// Split `KEY=VALUE` entries on the first `=`. Entries without `=` are skipped.
fn parse_env_args(entries: &[String]) -> EnvValues {
    let mut values = EnvValues::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((key, value)) => {
                values.insert(key.to_string(), value.to_string());
            }
            None => warn!(entry = %entry, "ignoring environment entry without '='"),
        }
    }
    values
}

fn run_stack_list() -> Result<(), AppError> {
    println!("Default servers (always configured):");
    for server in api::list_defaults()? {
        println!("  {} - {}", server.name, server.description);
    }

    println!("\nAvailable tech stacks:");
    for stack in api::list_stacks()? {
        println!("  {} - {} [{}]", stack.name, stack.description, stack.servers.join(", "));
    }
    Ok(())
}

fn run_stack_presets() -> Result<(), AppError> {
    println!("Stack presets:");
    for preset in api::list_presets()? {
        println!("  {} - {} [{}]", preset.name, preset.description, preset.stacks.join(", "));
    }
    Ok(())
}

fn run_stack_add(
    config: &RuntimeConfig,
    stacks: &[String],
    values: &EnvValues,
) -> Result<(), AppError> {
    let mut all_pending = PendingEnv::new();

    for stack_name in stacks {
        match api::apply_stack(config, stack_name, values) {
            Ok(outcome) => {
                println!("✅ Added stack '{}': {}", outcome.stack, outcome.servers_added.join(", "));
                all_pending.extend(outcome.pending_env);
            }
            Err(e) if e.is_lookup_miss() => println!("❌ {}", e),
            Err(e) => return Err(e),
        }
    }

    print_pending_required(&all_pending);
    Ok(())
}

fn run_stack_preset(
    config: &RuntimeConfig,
    preset_name: &str,
    values: &EnvValues,
) -> Result<(), AppError> {
    let outcome = api::apply_preset(config, preset_name, values)?;

    println!("✅ Configured preset '{}'", outcome.preset);
    for stack in &outcome.stacks {
        if let Ok(result) = &stack.result {
            println!("  {}: {}", stack.stack, result.servers_added.join(", "));
        }
    }
    for (_, e) in outcome.failures() {
        println!("  ❌ {}", e);
    }

    print_pending_required(&outcome.all_pending_env);
    Ok(())
}

fn run_stack_configure(
    config: &RuntimeConfig,
    server: &str,
    values: &EnvValues,
) -> Result<(), AppError> {
    if values.is_empty() {
        println!("❌ No environment variables provided. Use -e KEY=VALUE or -i for interactive");
        return Ok(());
    }

    api::update_server_env(config, server, values)?;
    println!("✅ Updated {} configuration", server);
    Ok(())
}

fn run_stack_configure_interactive(config: &RuntimeConfig, server: &str) -> Result<(), AppError> {
    let targets = api::prompt_targets(config, server)?;
    if targets.is_empty() {
        println!("No configuration needed for {}", server);
        return Ok(());
    }

    println!("Configure {}:", server);
    let mut values = EnvValues::new();
    for (name, entry) in &targets {
        if !entry.description.is_empty() {
            println!("  {}", entry.description);
        }
        if !entry.example.is_empty() {
            println!("  Example: {}", entry.example);
        }
        let Some(value) = prompt_value(name)? else {
            return Ok(());
        };
        if !value.is_empty() {
            values.insert(name.clone(), value);
        }
    }

    if values.is_empty() {
        return Ok(());
    }
    api::update_server_env(config, server, &values)?;
    println!("✅ Updated {} configuration", server);
    Ok(())
}

/// Read one value; `None` when the prompt was interrupted.
fn prompt_value(name: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(format!("  {}", name))
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", name, err))),
    }
}

fn run_stack_pending(config: &RuntimeConfig) -> Result<(), AppError> {
    let pending = api::pending_env(config)?;
    if pending.is_empty() {
        println!("✅ No pending configuration");
        return Ok(());
    }

    println!("Pending configuration:");
    print_pending_detail(&pending);
    println!("\nUse 'agent-stack stack configure <server> -i' to set values interactively");
    Ok(())
}

fn run_stack_show(config: &RuntimeConfig) -> Result<(), AppError> {
    let status = api::stack_status(config)?;

    println!("Default servers:");
    if status.defaults_configured {
        for server in api::list_defaults()? {
            println!("  {} - {}", server.name, server.description);
        }
    } else {
        println!("  Not yet configured. Run 'agent-stack init' first.");
    }

    println!("\nConfigured stacks:");
    if status.configured_stacks.is_empty() {
        println!("  None");
    }
    for stack in &status.configured_stacks {
        println!("  {}", stack);
    }

    if status.has_pending() {
        println!("\nPending configuration:");
        for (server, vars) in &status.pending_env {
            let names: Vec<&str> = vars.keys().map(String::as_str).collect();
            println!("  {}: {}", server, names.join(", "));
        }
    }
    Ok(())
}

fn run_stack_info(stack_name: &str) -> Result<(), AppError> {
    let detail = api::stack_info(stack_name)?;

    println!("{}: {}", detail.name, detail.description);
    for server in &detail.servers {
        println!("\nServer: {}", server.name);
        println!("  {}", server.command_line);
        if !server.env_vars.is_empty() {
            println!("  Environment Variables:");
            for var in &server.env_vars {
                let marker = if var.required { "required" } else { "optional" };
                println!("    • {} [{}]", var.name, marker);
                if !var.description.is_empty() {
                    println!("      {}", var.description);
                }
                if !var.example.is_empty() {
                    println!("      Example: {}", var.example);
                }
            }
        }
    }
    Ok(())
}

fn print_pending_required(pending: &PendingEnv) {
    if pending.is_empty() {
        return;
    }
    println!("\n⚠️  Pending configuration required:");
    print_pending_detail(pending);
    println!("\nUse 'agent-stack stack configure <server>' to set values");
}

fn print_pending_detail(pending: &PendingEnv) {
    for (server, vars) in pending {
        println!("\n  {}:", server);
        for (name, entry) in vars {
            println!("    {}: {}", name, entry.description);
            if !entry.example.is_empty() {
                println!("      Example: {}", entry.example);
            }
        }
    }
}
