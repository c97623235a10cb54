use bedside_cli::config::{
    BedsideConfig, delete_config, load_config, load_for_startup, migrate, save_config,
};
use bedside_cli::output::OutputFormat;
use serde_json::json;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let startup = load_for_startup(&dir.path().join("config.json"));
    assert!(startup.load_error.is_none());
    assert!(startup.migrated_from.is_none());
    let config = startup.config;
    assert_eq!(config.config_version, 1);
    assert_eq!(config.default_format, OutputFormat::Text);
    assert!(config.log_filter.is_none());
}

#[test]
fn save_then_load_keeps_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = BedsideConfig {
        default_format: OutputFormat::Json,
        log_filter: Some("debug".to_string()),
        ..BedsideConfig::default()
    };
    save_config(&path, &config).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn unversioned_config_is_stamped() {
    let migrated = migrate(json!({ "default_format": "json" }), 0).unwrap();
    assert_eq!(migrated, json!({ "config_version": 1, "default_format": "json" }));

    let config: BedsideConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.default_format, OutputFormat::Json);
    assert!(migrate(json!(["not", "an", "object"]), 0).is_err());
}

#[test]
fn unversioned_file_on_disk_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "created_at": "2024-01-01T00:00:00Z" }"#).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.default_format, OutputFormat::Text);

    let startup = load_for_startup(&path);
    assert_eq!(startup.migrated_from, Some(0));
    assert!(startup.load_error.is_none());
}

#[test]
fn newer_version_is_refused() {
    let err = migrate(json!({ "config_version": 9 }), 9).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn delete_reports_whether_a_file_existed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    assert!(!delete_config(&path).unwrap());
    save_config(&path, &BedsideConfig::default()).unwrap();
    assert!(delete_config(&path).unwrap());
    assert!(!path.exists());
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    std::fs::write(&path, "{not json").unwrap();
    let startup = load_for_startup(&path);
    assert_eq!(startup.config.default_format, OutputFormat::Text);
    assert!(startup.migrated_from.is_none());
    let err = startup.load_error.unwrap().to_string();
    assert!(err.contains("is not valid JSON"), "{err}");

    std::fs::write(&path, r#"{ "config_version": 9 }"#).unwrap();
    let err = load_for_startup(&path).load_error.unwrap().to_string();
    assert!(err.contains("newer than this build supports"), "{err}");
}
