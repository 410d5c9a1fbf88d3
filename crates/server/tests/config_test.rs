//! # Configuration Tests
//!
//! Tests for the layered configuration loading logic. Environment variables are
//! a shared, global resource, so every test here runs serially.

use powercast_server::config::{get_config, AppConfig, ConfigError};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

/// Clears all environment variables read by `get_config`.
fn clear_env_vars() {
    for var in [
        "PORT",
        "RELEVANCE_GATE",
        "GENAI_API_KEY",
        "TEST_SUBSTITUTED_KEY",
        "POWERCAST_PORT",
        "POWERCAST_RELEVANCE_GATE",
        "POWERCAST_AI__PROVIDER",
        "POWERCAST_AI__API_URL",
        "POWERCAST_AI__API_KEY",
        "POWERCAST_AI__MODEL_NAME",
        "POWERCAST_AI__TIMEOUT_SECS",
    ] {
        env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config file");
    file
}

#[test]
#[serial]
fn test_get_config_defaults() {
    clear_env_vars();

    let config = get_config(None).expect("Configuration should load with defaults");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.port, 6969);
    assert!(!config.relevance_gate);
    assert_eq!(config.ai.provider, "gemini");
    assert_eq!(config.ai.model_name, "gemini-2.0-flash");
    assert_eq!(config.ai.timeout_secs, 60);
    assert_eq!(config.ai.api_key, None);
    assert_eq!(config.ai.api_url, None);
}

#[test]
#[serial]
fn test_get_config_reads_api_key_from_env() {
    clear_env_vars();
    env::set_var("GENAI_API_KEY", "env-key");

    let config = get_config(None).unwrap();

    assert_eq!(config.ai.api_key, Some("env-key".to_string()));
    clear_env_vars();
}

#[test]
#[serial]
fn test_get_config_from_yaml_file() {
    clear_env_vars();
    let file = write_config(
        r#"
port: 8080
relevance_gate: true
ai:
  provider: "local"
  api_url: "http://localhost:1234/v1/chat/completions"
  model_name: "llama3"
  timeout_secs: 5
"#,
    );

    let config = get_config(file.path().to_str()).unwrap();

    assert_eq!(config.port, 8080);
    assert!(config.relevance_gate);
    assert_eq!(config.ai.provider, "local");
    assert_eq!(
        config.ai.api_url.as_deref(),
        Some("http://localhost:1234/v1/chat/completions")
    );
    assert_eq!(config.ai.model_name, "llama3");
    assert_eq!(config.ai.timeout_secs, 5);
}

#[test]
#[serial]
fn test_get_config_substitutes_env_references() {
    clear_env_vars();
    env::set_var("TEST_SUBSTITUTED_KEY", "substituted-key");
    let file = write_config(
        r#"
ai:
  api_key: "${TEST_SUBSTITUTED_KEY}"
"#,
    );

    let config = get_config(file.path().to_str()).unwrap();

    assert_eq!(config.ai.api_key, Some("substituted-key".to_string()));
    clear_env_vars();
}

#[test]
#[serial]
fn test_unset_substitution_falls_back_to_genai_api_key() {
    clear_env_vars();
    env::set_var("GENAI_API_KEY", "fallback-key");
    let file = write_config(
        r#"
ai:
  api_key: "${TEST_SUBSTITUTED_KEY}"
"#,
    );

    let config = get_config(file.path().to_str()).unwrap();

    assert_eq!(config.ai.api_key, Some("fallback-key".to_string()));
    clear_env_vars();
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env_vars();
    env::set_var("PORT", "9999");
    env::set_var("POWERCAST_AI__MODEL_NAME", "gemini-1.5-pro");
    env::set_var("POWERCAST_RELEVANCE_GATE", "true");
    let file = write_config(
        r#"
port: 8080
ai:
  model_name: "gemini-2.0-flash"
  api_key: "file-key"
"#,
    );

    let config = get_config(file.path().to_str()).unwrap();

    assert_eq!(config.port, 9999);
    assert_eq!(config.ai.model_name, "gemini-1.5-pro");
    assert!(config.relevance_gate);
    // A key from the file wins over the GENAI_API_KEY fallback.
    assert_eq!(config.ai.api_key, Some("file-key".to_string()));
    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_an_error() {
    clear_env_vars();

    let result = get_config(Some("/definitely/not/here/config.yml"));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
#[serial]
fn test_bare_env_strings_coerce_to_top_level_types() {
    clear_env_vars();
    env::set_var("PORT", "7070");
    env::set_var("RELEVANCE_GATE", "true");
    let file = write_config(
        r#"
ai:
  api_key: "file-key"
"#,
    );

    let config = get_config(file.path().to_str()).unwrap();

    assert_eq!(config.port, 7070);
    assert!(config.relevance_gate);
    clear_env_vars();
}
