use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_registers_default_servers_and_sets_flag() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configured 2 default server(s)"))
        .stdout(predicate::str::contains("playwright"))
        .stdout(predicate::str::contains("claude-code-sdk"));

    let servers = ctx.registered_servers();
    assert_eq!(servers["playwright"]["command"], "docker");
    assert_eq!(servers["claude-code-sdk"]["command"], "npx");
    assert_eq!(ctx.state()["defaults_configured"], true);
}

#[test]
fn init_twice_leaves_identical_files() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();
    let state = ctx.state_raw();
    let registry = std::fs::read_to_string(ctx.agent_registry_path()).unwrap();
    ctx.cli().arg("init").assert().success();

    assert_eq!(ctx.state_raw(), state);
    assert_eq!(std::fs::read_to_string(ctx.agent_registry_path()).unwrap(), registry);
}

#[test]
fn path_flag_targets_another_directory() {
    let ctx = TestContext::new();
    let other = ctx.home().join("project");
    std::fs::create_dir_all(&other).unwrap();

    ctx.cli().args(["-p", other.to_str().unwrap(), "init"]).assert().success();

    assert!(other.join(".agent/mcp.json").exists());
    assert!(!ctx.agent_registry_path().exists());
}

#[test]
fn missing_path_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--path", "does/not/exist", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
