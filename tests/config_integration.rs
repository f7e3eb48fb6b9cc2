//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use raycore::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("RAYCORE_DEBUG__LOG_LEVEL", "trace");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.debug.log_level, "trace");
    std::env::remove_var("RAYCORE_DEBUG__LOG_LEVEL");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("RAYCORE_DEBUG__LOG_LEVEL");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.probe.rays.len(), 2);
    assert_eq!(config.probe.rays[0].direction, [0.0, 0.0, 5.0]);
    assert_eq!(config.probe.samples, vec![-1.0, 0.0, 0.5, 1.0, 2.0]);
}

#[test]
#[serial]
fn test_user_overrides_default() {
    let dir = std::env::temp_dir().join(format!("raycore_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[probe]\nsamples = [1.0]\n\n[[probe.rays]]\norigin = [0.0, 0.0, 0.0]\ndirection = [1.0, 0.0, 0.0]\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[probe]\nsamples = [3.0, 4.0]\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.probe.samples, vec![3.0, 4.0]);
    assert_eq!(config.debug.log_level, "info");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_invalid_file_is_an_error() {
    let dir = std::env::temp_dir().join(format!("raycore_bad_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[probe]\nsamples = \"not a list\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));

    std::fs::remove_dir_all(&dir).unwrap();
}
