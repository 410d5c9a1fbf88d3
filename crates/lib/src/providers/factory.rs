//! # AI Provider Factory
//!
//! Instantiates the configured AI provider. Keeping this in the `lib` crate lets
//! any consumer build a provider from the same `ProviderConfig` the server loads.

use crate::{
    errors::PowerCastError,
    providers::ai::{
        gemini::{gemini_api_url, GeminiProvider},
        local::LocalAiProvider,
        AiProvider,
    },
    types::ProviderConfig,
};
use std::time::Duration;
use tracing::info;

/// Creates the AI provider described by `config`.
///
/// - `gemini` requires an API key. The URL is derived from the model name when
///   not set explicitly.
/// - `local` requires an API URL. The key is optional.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PowerCastError> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = config
                .api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or(PowerCastError::MissingApiKey)?;
            let api_url = config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| gemini_api_url(&config.model_name));
            info!(model = %config.model_name, "Configuring Gemini provider");
            Box::new(GeminiProvider::new(api_url, api_key, timeout)?)
        }
        "local" => {
            let api_url = config
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .ok_or_else(|| PowerCastError::MissingApiUrl(config.provider.clone()))?;
            info!(url = %api_url, model = %config.model_name, "Configuring local AI provider");
            Box::new(LocalAiProvider::new(
                api_url,
                config.api_key.clone(),
                Some(config.model_name.clone()),
                timeout,
            )?)
        }
        other => return Err(PowerCastError::UnsupportedProvider(other.to_string())),
    };

    Ok(provider)
}
