//! Project-relative locations of the files this tool reads and writes.

use std::path::{Path, PathBuf};

/// The `.agent/` directory owned by this tool.
pub const AGENT_DIR: &str = ".agent";

/// Persisted stack state file name inside `.agent/`.
pub const STACK_STATE_FILE: &str = "stack.json";

/// This tool's registry layer inside `.agent/`.
pub const AGENT_REGISTRY_FILE: &str = "mcp.json";

/// Project-level registry layer at the project root.
pub const PROJECT_REGISTRY_FILE: &str = ".mcp.json";

/// User-level registry file in `$HOME`.
pub const GLOBAL_REGISTRY_FILE: &str = ".claude.json";

// ── Tool-owned files ───────────────────────────────────────────────────

/// `.agent/`
pub fn agent_dir(root: &Path) -> PathBuf {
    root.join(AGENT_DIR)
}

/// `.agent/stack.json`
pub fn stack_state(root: &Path) -> PathBuf {
    agent_dir(root).join(STACK_STATE_FILE)
}

/// `.agent/mcp.json`
pub fn agent_registry(root: &Path) -> PathBuf {
    agent_dir(root).join(AGENT_REGISTRY_FILE)
}

// ── Foreign registry layers ────────────────────────────────────────────

/// `.mcp.json`
pub fn project_registry(root: &Path) -> PathBuf {
    root.join(PROJECT_REGISTRY_FILE)
}

/// `$HOME/.claude.json`
pub fn global_registry(home: &Path) -> PathBuf {
    home.join(GLOBAL_REGISTRY_FILE)
}
