//! Tests for bootstrap configuration loading and graceful degradation
//!
//! - Missing TOML file SHALL NOT cause termination (defaults apply)
//! - Malformed TOML file is reported as a configuration error
//! - Priority order: CLI override > TOML > built-in default
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked #[serial] so they do
//! not race each other.

use std::env;
use std::fs;
use std::path::PathBuf;

use fvm_common::config::{Config, ConfigOverrides, TomlConfig, DEFAULT_HOST, DEFAULT_PORT};
use fvm_common::Error;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = TomlConfig::load_optional(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());

    let config = Config::resolve(ConfigOverrides {
        config_path: Some(dir.path().join("absent.toml")),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.log_level, "info");
    assert!(config.source.is_none());
}

#[test]
fn test_partial_file_fills_defaults() {
    let config = TomlConfig::from_toml("port = 8080\n").unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.host, DEFAULT_HOST);
    assert!(config.catalog_path.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_full_file() {
    let text = r#"
        host = "0.0.0.0"
        port = 9100
        catalog_path = "/srv/fvm/travel.json"

        [logging]
        level = "debug"
    "#;
    let config = TomlConfig::from_toml(text).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 9100);
    assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/fvm/travel.json")));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "port = \"not a number\"").unwrap();

    let result = TomlConfig::load_optional(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_resolve_explicit_path_with_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fvm.toml");
    fs::write(&path, "port = 7000\n[logging]\nlevel = \"warn\"\n").unwrap();

    let config = Config::resolve(ConfigOverrides {
        config_path: Some(path.clone()),
        log_level: Some("trace".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.source, Some(path));
    assert_eq!(config.port, 7000);
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.catalog_path, None);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_resolve_platform_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("fvm")).unwrap();
    fs::write(dir.path().join("fvm").join("config.toml"), "port = 6123\n").unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = Config::resolve(ConfigOverrides::default()).unwrap();

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(config.port, 6123);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_resolve_without_config_file() {
    let dir = TempDir::new().unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = Config::resolve(ConfigOverrides::default()).unwrap();

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, DEFAULT_HOST);
    assert!(config.source.is_none());
}
