//! Shared testing harness for `agent-stack` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project and home directory.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the project directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("agent-stack").expect("Failed to locate agent-stack binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("AGENT_STACK_GLOBAL_MCP", self.global_registry_path())
            .env_remove("RUST_LOG")
            .env_remove("AGENT_STACK_LOG");
        cmd
    }

    /// Location of the emulated user-level registry file.
    pub(crate) fn global_registry_path(&self) -> PathBuf {
        self.home().join(".claude.json")
    }

    pub(crate) fn state_path(&self) -> PathBuf {
        self.work_dir.join(".agent/stack.json")
    }

    pub(crate) fn agent_registry_path(&self) -> PathBuf {
        self.work_dir.join(".agent/mcp.json")
    }

    /// Raw bytes of the state file, if present.
    pub(crate) fn state_raw(&self) -> Option<String> {
        fs::read_to_string(self.state_path()).ok()
    }

    /// Parsed state file.
    pub(crate) fn state(&self) -> Value {
        let content = fs::read_to_string(self.state_path()).expect("read .agent/stack.json");
        serde_json::from_str(&content).expect("parse .agent/stack.json")
    }

    /// Parsed `mcpServers` map of the tool's registry layer.
    pub(crate) fn registered_servers(&self) -> Value {
        let content = fs::read_to_string(self.agent_registry_path()).expect("read .agent/mcp.json");
        let document: Value = serde_json::from_str(&content).expect("parse .agent/mcp.json");
        document["mcpServers"].clone()
    }

    /// Write a file relative to the project directory.
    pub(crate) fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(path, content).expect("write project file");
    }

    /// Run `agent-stack stack add` and assert success.
    pub(crate) fn add_stack(&self, stack: &str, env: &[&str]) {
        let mut cmd = self.cli();
        cmd.args(["stack", "add", stack]);
        for entry in env {
            cmd.args(["-e", entry]);
        }
        cmd.assert().success();
    }
}
