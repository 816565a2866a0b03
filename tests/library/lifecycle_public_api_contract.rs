use agent_stack::RuntimeConfig;
use agent_stack::app::api;
use agent_stack::{AppError, EnvValues};
use tempfile::TempDir;

fn values(pairs: &[(&str, &str)]) -> EnvValues {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn library_lifecycle_coverage() {
    let temp = TempDir::new().unwrap();
    let config = RuntimeConfig::at(temp.path());

    // 1. Defaults
    let defaults = api::init(&config).expect("init failed");
    assert_eq!(defaults.servers_added, vec!["playwright", "claude-code-sdk"]);
    assert!(api::defaults_configured(&config).unwrap());

    // 2. Preset
    let preset = api::apply_preset(&config, "devops", &EnvValues::new()).expect("preset failed");
    assert_eq!(preset.stacks.len(), 5);
    assert!(preset.all_pending_env.contains_key("github"));

    // 3. Env update
    api::update_server_env(&config, "github", &values(&[("GITHUB_PERSONAL_ACCESS_TOKEN", "t")]))
        .expect("update failed");
    assert!(!api::pending_env(&config).unwrap().contains_key("github"));

    // 4. Status
    let status = api::stack_status(&config).unwrap();
    assert_eq!(
        status.configured_stacks,
        vec!["github", "docker", "kubernetes", "aws", "sentry"]
    );
    assert!(status.defaults_configured);

    // 5. Registry view
    let names: Vec<_> =
        api::registry_servers(&config).unwrap().into_iter().map(|entry| entry.name).collect();
    assert!(names.contains(&"playwright".to_string()));
    assert!(names.contains(&"aws-kb-retrieval".to_string()));
}

#[test]
fn lookup_misses_are_typed_errors() {
    let temp = TempDir::new().unwrap();
    let config = RuntimeConfig::at(temp.path());

    assert!(matches!(
        api::apply_stack(&config, "nosuch", &EnvValues::new()),
        Err(AppError::UnknownStack(_))
    ));
    assert!(matches!(
        api::apply_preset(&config, "nosuch", &EnvValues::new()),
        Err(AppError::UnknownPreset(_))
    ));
    assert!(matches!(
        api::update_server_env(&config, "nosuch", &values(&[("A", "1")])),
        Err(AppError::UnknownServer(_))
    ));
    assert!(matches!(api::stack_info("nosuch"), Err(AppError::UnknownStack(_))));
    assert!(!temp.path().join(".agent").exists());
}

#[test]
fn catalog_queries_are_available_without_a_project() {
    assert_eq!(api::list_stacks().unwrap().len(), 28);
    assert_eq!(api::list_presets().unwrap().len(), 6);
    assert_eq!(api::list_defaults().unwrap().len(), 2);

    let vars = api::required_env_vars("slack").unwrap();
    assert_eq!(vars.len(), 2);
    assert!(vars.iter().all(|(server, var)| server == "slack" && var.required));
    assert!(api::required_env_vars("nosuch").unwrap().is_empty());
}
