//! Init command implementation.

use crate::app::config::RuntimeConfig;
use crate::domain::AppError;

pub fn run_init(config: &RuntimeConfig) -> Result<(), AppError> {
    let outcome = crate::app::api::init(config)?;
    println!("✅ Configured {} default server(s)", outcome.servers_added.len());
    for name in &outcome.servers_added {
        println!("  • {}", name);
    }
    Ok(())
}
