use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_merges_layers_with_source_tags() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.global_registry_path(),
        r#"{"mcpServers": {"from-home": {"command": "npx", "args": ["-y", "home-server"]}}}"#,
    )
    .unwrap();
    ctx.write_project_file(
        ".mcp.json",
        r#"{"mcpServers": {"fetch": {"command": "uvx", "args": ["mcp-server-fetch"]}}}"#,
    );
    ctx.add_stack("fetch", &[]);

    ctx.cli()
        .args(["mcp", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-home [global] npx -y home-server"))
        .stdout(predicate::str::contains("fetch [agent] docker run -i --rm mcp/fetch"));
}

#[test]
fn env_values_are_not_printed() {
    let ctx = TestContext::new();
    ctx.add_stack("github", &["GITHUB_PERSONAL_ACCESS_TOKEN=ghp_secret"]);

    ctx.cli()
        .args(["mcp", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("env: GITHUB_PERSONAL_ACCESS_TOKEN"))
        .stdout(predicate::str::contains("ghp_secret").not());
}

#[test]
fn empty_registry_says_so() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["mcp", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No MCP servers registered"));
}
