use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn configure_merges_env_and_clears_pending() {
    let ctx = TestContext::new();
    ctx.add_stack("github", &[]);

    ctx.cli()
        .args(["stack", "configure", "github", "-e", "GITHUB_PERSONAL_ACCESS_TOKEN=ghp_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated github configuration"));

    assert_eq!(ctx.registered_servers()["github"]["env"]["GITHUB_PERSONAL_ACCESS_TOKEN"], "ghp_1");
    assert!(ctx.state()["pending_env"].get("github").is_none());
}

#[test]
fn configure_unknown_server_leaves_state_untouched() {
    let ctx = TestContext::new();
    ctx.add_stack("github", &[]);
    let before = ctx.state_raw();

    ctx.cli()
        .args(["stack", "configure", "nonexistent", "-e", "X=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server 'nonexistent' not found in config"));

    assert_eq!(ctx.state_raw(), before);
}

#[test]
fn configure_without_values_asks_for_them() {
    let ctx = TestContext::new();
    ctx.add_stack("github", &[]);

    ctx.cli()
        .args(["stack", "configure", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No environment variables provided"));

    assert!(ctx.state()["pending_env"]["github"].is_object());
}

#[test]
fn interactive_configure_with_nothing_to_ask_exits_cleanly() {
    let ctx = TestContext::new();
    ctx.add_stack("fetch", &[]);

    ctx.cli()
        .args(["stack", "configure", "fetch", "-i"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration needed for fetch"));
}
