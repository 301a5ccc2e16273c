use std::io::Write;
use taskify_core::DashboardConfig;

#[test]
fn test_config_defaults() {
    let config = DashboardConfig::default();
    assert_eq!(config.api_url, "http://localhost:6543");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.task_list.page_limit, 20);
    assert!(config.task_list.default_state.is_none());
}

#[test]
fn test_load_without_file() {
    let config = DashboardConfig::load(Some("/nonexistent/path.toml")).unwrap();
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.log_filter, "taskify=info");
}

#[test]
fn test_load_from_toml() {
    let path = std::env::temp_dir().join(format!("taskify-config-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "api_url = \"http://tasks.internal:8080/\"\nrequest_timeout_secs = 5\n\n[task_list]\npage_limit = 50\ndefault_state = \"FAILED\""
    )
    .unwrap();
    drop(file);

    let config = DashboardConfig::load(path.to_str()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.api_base(), "http://tasks.internal:8080");
    assert_eq!(config.request_timeout(), std::time::Duration::from_secs(5));
    assert_eq!(config.task_list.page_limit, 50);
    assert_eq!(config.task_list.default_state.as_deref(), Some("FAILED"));
    assert_eq!(config.log_filter, "taskify=info");
}
