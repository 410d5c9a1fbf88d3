pub mod gemini;
pub mod local;

use crate::errors::PowerCastError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use reqwest::Client as ReqwestClient;
use std::fmt::Debug;
use std::time::Duration;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for sending a single prompt to a
/// Large Language Model (e.g., Gemini, a local model) and receiving its text.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for the given prompt.
    ///
    /// The result is the raw text produced by the model, untrimmed.
    async fn generate(&self, prompt: &str) -> Result<String, PowerCastError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Builds the HTTP client shared by the providers, bounded by `timeout`.
pub(crate) fn build_http_client(timeout: Duration) -> Result<ReqwestClient, PowerCastError> {
    ReqwestClient::builder()
        .timeout(timeout)
        .build()
        .map_err(PowerCastError::ReqwestClientBuild)
}

/// Reads the body of a failed response and classifies the failure.
pub(crate) async fn error_from_response(response: reqwest::Response) -> PowerCastError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    PowerCastError::from_status(status, error_text)
}
