//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state is immutable and cheap to clone; every
//! request handler reads the same configuration and `PowerCastClient`.

use crate::config::AppConfig;
use powercast::{
    providers::{ai::AiProvider, create_provider},
    PowerCastClient, PowerCastClientBuilder,
};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The client used to answer questions.
    pub client: Arc<PowerCastClient>,
}

impl AppState {
    /// Builds the state around an already constructed AI provider.
    ///
    /// Tests use this to substitute a mock provider for the configured one.
    pub fn with_provider(
        config: AppConfig,
        ai_provider: Box<dyn AiProvider>,
    ) -> anyhow::Result<Self> {
        let client = PowerCastClientBuilder::new()
            .ai_provider(ai_provider)
            .relevance_gate(config.relevance_gate)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
        })
    }
}

/// Builds the shared application state from the configuration.
///
/// Instantiates the configured AI provider. Fails if the provider is unknown or
/// is missing its API key (Gemini) or URL (local).
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let ai_provider = create_provider(&config.ai)?;
    info!(
        provider = %config.ai.provider,
        model = %config.ai.model_name,
        relevance_gate = config.relevance_gate,
        "Initialized AI provider."
    );
    AppState::with_provider(config, ai_provider)
}
