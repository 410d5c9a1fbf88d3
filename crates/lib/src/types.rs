use crate::{errors::PowerCastError, providers::ai::AiProvider};
use serde::Deserialize;

/// A user's question, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Trims `raw` and rejects it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, PowerCastError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PowerCastError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Configuration for the AI provider backing the assistant.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key. Required for Gemini, optional for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Upper bound on a single model call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model_name() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// The client that answers PowerCast questions.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PowerCastClient {
    pub ai_provider: Box<dyn AiProvider>,
    pub relevance_gate: bool,
}

/// A builder for creating `PowerCastClient` instances.
#[derive(Default)]
pub struct PowerCastClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    relevance_gate: bool,
}

impl PowerCastClientBuilder {
    /// Creates a new `PowerCastClientBuilder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use powercast::PowerCastClientBuilder;
    ///
    /// let builder = PowerCastClientBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used to answer questions.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// When enabled, questions without any domain keyword are refused locally
    /// instead of being sent to the model.
    pub fn relevance_gate(mut self, enabled: bool) -> Self {
        self.relevance_gate = enabled;
        self
    }

    /// Builds the `PowerCastClient`.
    pub fn build(self) -> Result<PowerCastClient, PowerCastError> {
        let ai_provider = self.ai_provider.ok_or(PowerCastError::MissingAiProvider)?;
        Ok(PowerCastClient {
            ai_provider,
            relevance_gate: self.relevance_gate,
        })
    }
}
