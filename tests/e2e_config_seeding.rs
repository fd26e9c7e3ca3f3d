//! End-to-End Test Suite: Configuration Driving the Registry
//!
//! Loads configuration files from disk, seeds a registry from them and checks
//! the one-shot commands and the shell against the result.

use std::fs;
use std::io::Cursor;

use registrar_cli::commands::{CatalogCommand, ConfigAction, ConfigCommand};
use registrar_cli::{build_registry, OutputStyle, Shell};
use registrar_config::types::ConfigLoader;
use registrar_config::{AppConfig, ConfigError, ConfigManager};
use tempfile::TempDir;

const MATH_DEPARTMENT: &str = r#"
[logging]
level = "info"

[shell]
colors = false
show_banner = false

[[seed.courses]]
id = "MATH1"
name = "Calculus I"
credits = 4
capacity = 1

[[seed.courses]]
id = "MATH2"
name = "Linear Algebra"
credits = 3
capacity = 30

[[seed.students]]
id = 100
name = "Noor"

[[seed.students]]
id = 101
name = "Omar"
"#;

fn load(contents: &str, prefix: &str) -> Result<AppConfig, ConfigError> {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config file");
    ConfigManager::with_path(path)
        .with_env_prefix(prefix)
        .load_config()
}

#[test]
fn test_configured_seed_replaces_default_catalog() {
    let config = load(MATH_DEPARTMENT, "REGISTRAR_E2E_CATALOG").expect("config should load");

    let mut out = Vec::new();
    CatalogCommand::new(config, false, true)
        .write_to(&mut out, OutputStyle::plain())
        .expect("catalog should render");
    let courses: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");

    let ids: Vec<_> = courses
        .as_array()
        .expect("catalog is a JSON array")
        .iter()
        .map(|course| course["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["MATH1", "MATH2"]);
}

#[test]
fn test_shell_runs_on_configured_seed() {
    let config = load(MATH_DEPARTMENT, "REGISTRAR_E2E_SHELL").expect("config should load");
    let registry = build_registry(&config, false).expect("seed should apply");

    let script = "3\n100\nMATH1\n3\n101\nMATH1\n4\n4\n7\n101\n0\n";
    let mut shell = Shell::new(registry, Cursor::new(script.to_string()), Vec::new())
        .with_banner(config.shell.show_banner);
    let summary = shell.run().expect("session should finish");
    let output = String::from_utf8(shell.into_output()).expect("UTF-8 output");

    assert!(!output.contains("University Management System"));
    assert!(output.contains("Enrolled Student 100 in MATH1"));
    assert!(output.contains("Course MATH1 is FULL! Student 101 added to the waitlist (position 1)."));
    assert!(output.contains("=== Transcript for Omar (101) ==="));
    assert!(output.contains(" (no enrollments)"));
    assert_eq!(summary.waitlist_entries, 1);
    assert_eq!(summary.students, 2);
}

#[test]
fn test_no_seed_starts_empty_even_with_configured_seed() {
    let config = load(MATH_DEPARTMENT, "REGISTRAR_E2E_NOSEED").expect("config should load");
    let registry = build_registry(&config, true).expect("empty registry");
    assert!(registry.catalog().is_empty());
    assert_eq!(registry.students().count(), 0);
}

#[test]
fn test_config_show_reflects_file() {
    let config = load(MATH_DEPARTMENT, "REGISTRAR_E2E_SHOW").expect("config should load");

    let mut out = Vec::new();
    ConfigCommand::new(ConfigAction::Show(config.clone()))
        .write_to(&mut out)
        .expect("config should render");
    let text = String::from_utf8(out).expect("UTF-8 output");

    assert!(text.contains("level = \"info\""));
    assert!(text.contains("Linear Algebra"));
}

#[test]
fn test_duplicate_seed_ids_are_rejected_before_seeding() {
    let duplicated = format!(
        "{}\n[[seed.students]]\nid = 100\nname = \"Noor again\"\n",
        MATH_DEPARTMENT
    );
    let err = load(&duplicated, "REGISTRAR_E2E_DUP").expect_err("duplicate IDs must fail");
    assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("100")));
}
