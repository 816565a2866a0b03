use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_registers_server_and_reports_pending_variables() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "add", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added stack 'github': github"))
        .stdout(predicate::str::contains("GITHUB_PERSONAL_ACCESS_TOKEN"))
        .stdout(predicate::str::contains("ghp_xxxxxxxxxxxx"));

    let servers = ctx.registered_servers();
    assert_eq!(servers["github"]["command"], "docker");
    assert!(servers["github"].get("env").is_none());

    let state = ctx.state();
    assert_eq!(state["stacks"], serde_json::json!(["github"]));
    assert!(state["pending_env"]["github"]["GITHUB_PERSONAL_ACCESS_TOKEN"].is_object());
}

#[test]
fn supplied_values_fill_env_and_placeholders() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "add", "sqlite", "-e", "SQLITE_DIR=/d", "-e", "SQLITE_FILE=a.db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending configuration required").not());

    let sqlite = &ctx.registered_servers()["sqlite"];
    assert_eq!(
        sqlite["args"],
        serde_json::json!(["run", "-i", "--rm", "-v", "/d:/data", "mcp/sqlite", "--db-path", "/data/a.db"])
    );
    assert_eq!(sqlite["env"]["SQLITE_DIR"], "/d");
    assert!(ctx.state()["pending_env"].get("sqlite").is_none());
}

#[test]
fn multiple_stacks_apply_in_order_and_unknown_ones_are_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "add", "fetch", "nosuch", "memory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added stack 'fetch'"))
        .stdout(predicate::str::contains("❌ Unknown stack: nosuch"))
        .stdout(predicate::str::contains("Added stack 'memory'"));

    assert_eq!(ctx.state()["stacks"], serde_json::json!(["fetch", "memory"]));
}

#[test]
fn unknown_stack_alone_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "add", "nosuch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown stack: nosuch"));

    assert!(ctx.state_raw().is_none());
    assert!(!ctx.agent_registry_path().exists());
}

#[test]
fn reapplying_a_stack_records_it_once() {
    let ctx = TestContext::new();

    ctx.add_stack("github", &[]);
    ctx.add_stack("github", &[]);

    assert_eq!(ctx.state()["stacks"], serde_json::json!(["github"]));
}

#[test]
fn env_entry_without_equals_is_ignored() {
    let ctx = TestContext::new();

    ctx.cli().args(["stack", "add", "github", "-e", "NOVALUE"]).assert().success();

    assert!(ctx.registered_servers()["github"].get("env").is_none());
}

#[test]
fn corrupted_state_file_is_replaced() {
    let ctx = TestContext::new();
    ctx.write_project_file(".agent/stack.json", "{ not json");

    ctx.add_stack("fetch", &[]);

    assert_eq!(ctx.state()["stacks"], serde_json::json!(["fetch"]));
}

#[test]
fn foreign_registry_files_are_not_modified() {
    let ctx = TestContext::new();
    let project = r#"{"mcpServers": {"fetch": {"command": "uvx", "args": ["mcp-server-fetch"]}}}"#;
    ctx.write_project_file(".mcp.json", project);

    ctx.add_stack("fetch", &[]);

    assert_eq!(std::fs::read_to_string(ctx.work_dir().join(".mcp.json")).unwrap(), project);
}
