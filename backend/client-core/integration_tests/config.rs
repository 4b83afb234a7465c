use client_core::config::AppConfig;
use client_core::error::ConfigError;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults rather than an error.
///
/// **WHY THIS MATTERS**: First run has no config file.
///
/// **BUG THIS CATCHES**: Would catch `load` propagating the NotFound io error.
#[test]
fn given_no_config_file_when_loading_then_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
}

/// **VALUE**: Verifies a hand-written partial config keeps defaults for omitted fields.
///
/// **WHY THIS MATTERS**: Users edit `config.json` by hand and usually set one value.
///
/// **BUG THIS CATCHES**: Would catch a missing `serde(default)` making every section mandatory.
#[test]
fn given_partial_config_file_when_loading_then_omitted_values_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "catalog": { "list_limit": 251 } }"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.catalog.list_limit, 251);
    assert_eq!(config.api, AppConfig::default().api);
}

/// **VALUE**: Verifies a corrupted file is reported as a parse error.
///
/// **WHY THIS MATTERS**: Silently replacing a user's broken config with defaults would
/// hide their mistake; the CLI reports it and stops.
///
/// **BUG THIS CATCHES**: Would catch parse errors being swallowed.
#[test]
fn given_corrupted_config_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_out_of_range_config_file_when_loading_then_validation_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "api": { "timeout_secs": 0 } }"#,
    )
    .unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
