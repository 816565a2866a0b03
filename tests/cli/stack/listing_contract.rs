use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_defaults_then_stacks() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default servers"))
        .stdout(predicate::str::contains("playwright"))
        .stdout(predicate::str::contains("postgres - PostgreSQL database"))
        .stdout(predicate::str::contains("qdrant"));
}

#[test]
fn presets_lists_included_stacks() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devops"))
        .stdout(predicate::str::contains("github, docker, kubernetes, aws, sentry"));
}

#[test]
fn info_shows_servers_and_variables() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "info", "sqlite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server: sqlite"))
        .stdout(predicate::str::contains("{SQLITE_DIR}:/data"))
        .stdout(predicate::str::contains("SQLITE_FILE [required]"));
}

#[test]
fn info_for_unknown_stack_reports_it() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["stack", "info", "nosuch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown stack: nosuch"));
}
