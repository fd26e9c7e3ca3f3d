use registrar_config::types::ConfigLoader;
use registrar_config::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "warn");
    assert!(config.shell.colors);
    assert!(config.seed.enabled);

    let course_ids: Vec<_> = config.seed.courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(course_ids, vec!["CS101", "CS102"]);
    assert_eq!(config.seed.courses[1].capacity, 1);
    assert_eq!(config.seed.students[0].id, 2023001);
    assert_eq!(config.seed.students[1].name, "Sara");
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = ConfigManager::with_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix("REGISTRAR_TEST_MISSING");

    let config = manager.load_config().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"

[shell]
colors = false

[seed]
enabled = true

[[seed.courses]]
id = "MATH1"
name = "Calculus"
credits = 4
capacity = 2

[[seed.students]]
id = 7
name = "Lina"
"#,
    )
    .unwrap();

    let mut manager =
        ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_FILE");
    let config = manager.load_config().unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(!config.shell.colors);
    assert!(config.shell.show_banner);
    assert_eq!(config.seed.courses.len(), 1);
    assert_eq!(config.seed.courses[0].id, "MATH1");
    assert_eq!(config.seed.students[0].name, "Lina");
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

    std::env::set_var("REGISTRAR_TEST_ENV__LOGGING__LEVEL", "error");
    let mut manager = ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_ENV");
    let config = manager.load_config().unwrap();
    std::env::remove_var("REGISTRAR_TEST_ENV__LOGGING__LEVEL");

    assert_eq!(config.logging.level, "error");
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[[seed.courses]]\nid = \"X\"\nname = \"X\"\ncredits = 0\ncapacity = 1\n",
    )
    .unwrap();

    let mut manager = ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_INVALID");
    assert!(matches!(
        manager.load_config(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let manager = ConfigManager::with_path(path.clone()).with_env_prefix("REGISTRAR_TEST_SAVE");

    let mut config = AppConfig::default();
    config.logging.level = "info".to_string();
    config.seed.enabled = false;
    manager.save_config(&config).unwrap();
    assert!(path.exists());

    let mut manager = ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_SAVE");
    assert_eq!(manager.load_config().unwrap(), config);
}

#[test]
fn test_default_config_path_layout() {
    let path = ConfigManager::default_config_path();
    assert!(path.ends_with("registrar/config.toml"));
}
