//! Structured logging setup.
//!
//! Log output goes to stderr so command output on stdout stays clean. The
//! level comes from `AGENT_STACK_LOG` (trace, debug, info, warn, error) and
//! defaults to `warn`. When `RUST_LOG` is set it takes over entirely.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "AGENT_STACK_LOG";

static INIT: Once = Once::new();

/// Parse a level name case-insensitively.
pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Initialize logging from the environment. Later calls are no-ops.
pub fn init_from_env() {
    let level = match env::var(LOG_LEVEL_ENV) {
        Ok(value) => parse_level(&value).unwrap_or_else(|| {
            eprintln!(
                "Invalid {} value '{}', using warn. Valid levels: trace, debug, info, warn, error",
                LOG_LEVEL_ENV, value
            );
            Level::WARN
        }),
        Err(_) => Level::WARN,
    };
    init(level);
}

/// Initialize logging at `level`. Later calls are no-ops.
pub fn init(level: Level) {
    INIT.call_once(|| {
        let filter = if env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("warn,agent_stack={}", level))
        };

        // A subscriber installed elsewhere (for example by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
