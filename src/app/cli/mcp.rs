//! MCP registry command implementation.

use clap::Subcommand;

use crate::app::config::RuntimeConfig;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum McpCommands {
    /// List servers from every registry layer
    #[clap(visible_alias = "ls")]
    List,
}

pub fn run_mcp(config: &RuntimeConfig, command: McpCommands) -> Result<(), AppError> {
    match command {
        McpCommands::List => run_mcp_list(config),
    }
}

fn run_mcp_list(config: &RuntimeConfig) -> Result<(), AppError> {
    let entries = crate::app::api::registry_servers(config)?;
    if entries.is_empty() {
        println!("No MCP servers registered");
        return Ok(());
    }

    println!("Registered MCP servers:");
    for entry in entries {
        println!("  {} [{}] {}", entry.name, entry.source, entry.command_line);
        if !entry.env_names.is_empty() {
            println!("    env: {}", entry.env_names.join(", "));
        }
    }
    Ok(())
}
