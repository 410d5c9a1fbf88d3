//! # Application Configuration
//!
//! This module defines the configuration structure for the `powercast-server` and
//! loads it from built-in defaults, an optional YAML file, and environment
//! variables, in that order of precedence.

use ::config::{Config as ConfigBuilder, Environment, File, FileFormat};
use powercast::ProviderConfig;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// The default configuration file, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// The environment variable that supplies the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GENAI_API_KEY";

/// A custom error type for configuration issues.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    #[error("{0}")]
    NotFound(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Refuse questions without any domain keyword locally, without calling the model.
    #[serde(default)]
    pub relevance_gate: bool,
    /// The AI provider backing the assistant.
    #[serde(default)]
    pub ai: ProviderConfig,
}

/// Provides a default value for the `port` field if not set anywhere else.
fn default_port() -> u16 {
    6969
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            relevance_gate: false,
            ai: ProviderConfig::default(),
        }
    }
}

// Helper to read a file, substitute `${VAR}` references from the environment,
// and return its content. Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Treats empty strings, which unset `${VAR}` substitutions produce, as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Loads the application configuration.
///
/// Layers, lowest precedence first:
/// - Built-in defaults (`port: 6969`, Gemini `gemini-2.0-flash`, 60s timeout).
/// - The YAML file at `config_path_override`, or `config.yml` if it exists.
///   An explicit override that does not exist is an error.
/// - Unprefixed environment variables for top-level keys, e.g. `PORT`.
/// - `POWERCAST_`-prefixed variables for nested keys, e.g. `POWERCAST_AI__MODEL_NAME`.
/// - `GENAI_API_KEY`, if no API key was configured by any layer above.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            if let Some(content) = read_and_substitute(DEFAULT_CONFIG_PATH)? {
                info!("Loading configuration from '{DEFAULT_CONFIG_PATH}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            }
        }
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("POWERCAST")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    config.ai.api_url = non_empty(config.ai.api_url.take());
    config.ai.api_key = non_empty(config.ai.api_key.take());
    if config.ai.api_key.is_none() {
        config.ai.api_key = non_empty(env::var(API_KEY_ENV_VAR).ok());
    }

    Ok(config)
}
