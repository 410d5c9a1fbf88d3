use thiserror::Error;

/// Custom error types for the PowerCast client.
///
/// Every way an `ask` can fail has its own variant so callers (the HTTP
/// server in particular) can map each kind to a distinct response.
#[derive(Error, Debug)]
pub enum PowerCastError {
    #[error("No question provided.")]
    EmptyQuestion,
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("API URL is missing for provider '{0}'")]
    MissingApiUrl(String),
    #[error("Unsupported AI provider type '{0}'")]
    UnsupportedProvider(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to AI provider timed out")]
    AiTimeout,
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("AI provider rejected the credentials: {0}")]
    AiAuthentication(String),
    #[error("AI provider quota exhausted: {0}")]
    AiQuotaExceeded(String),
    #[error("AI provider returned status {status}: {message}")]
    AiApi { status: u16, message: String },
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned no text")]
    EmptyResponse,
}

impl PowerCastError {
    /// Classifies a transport-level `reqwest` failure.
    ///
    /// The URL is stripped because it carries the API key as a query parameter.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PowerCastError::AiTimeout
        } else {
            PowerCastError::AiRequest(err.without_url())
        }
    }

    /// Classifies a failure while reading or decoding a response body.
    pub fn from_decode(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PowerCastError::AiTimeout
        } else {
            PowerCastError::AiDeserialization(err.without_url())
        }
    }

    /// Classifies a non-success HTTP status returned by an AI provider.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 | 403 => PowerCastError::AiAuthentication(body),
            429 => PowerCastError::AiQuotaExceeded(body),
            code => PowerCastError::AiApi {
                status: code,
                message: body,
            },
        }
    }
}
