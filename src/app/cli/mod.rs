//! CLI Adapter.

mod init;
mod mcp;
mod stack;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::config::RuntimeConfig;

#[derive(Parser)]
#[command(name = "agent-stack")]
#[command(version)]
#[command(
    about = "Resolve tech-stack catalog entries into MCP server registrations",
    long_about = None
)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'p', long, global = true)]
    path: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the default servers for this project
    #[clap(visible_alias = "i")]
    Init,
    /// Configure tech stacks and their MCP servers
    #[clap(visible_alias = "s")]
    Stack {
        #[command(subcommand)]
        command: stack::StackCommands,
    },
    /// Inspect registered MCP servers
    Mcp {
        #[command(subcommand)]
        command: mcp::McpCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = RuntimeConfig::resolve(cli.path).and_then(|config| match cli.command {
        Commands::Init => init::run_init(&config),
        Commands::Stack { command } => stack::run_stack(&config, command),
        Commands::Mcp { command } => mcp::run_mcp(&config, command),
    });

    match result {
        Ok(()) => {}
        Err(e) if e.is_lookup_miss() => println!("❌ {}", e),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
