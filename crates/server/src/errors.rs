use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use powercast::PowerCastError;
use serde_json::json;
use tracing::{error, warn};

/// The message returned when a request carries no usable question.
pub const NO_QUESTION_MESSAGE: &str = "No question provided.";

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the `powercast` client.
    PowerCast(PowerCastError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `PowerCastError` to `AppError`.
impl From<PowerCastError> for AppError {
    fn from(err: PowerCastError) -> Self {
        AppError::PowerCast(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl AppError {
    /// The status code and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::PowerCast(err) => match err {
                PowerCastError::EmptyQuestion => {
                    (StatusCode::BAD_REQUEST, NO_QUESTION_MESSAGE.to_string())
                }
                PowerCastError::AiTimeout => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "The AI provider did not respond in time.".to_string(),
                ),
                PowerCastError::AiQuotaExceeded(_) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The AI provider quota is exhausted. Please try again later.".to_string(),
                ),
                PowerCastError::AiAuthentication(_) => (
                    StatusCode::BAD_GATEWAY,
                    "The AI provider rejected the server's credentials.".to_string(),
                ),
                PowerCastError::AiRequest(_) => (
                    StatusCode::BAD_GATEWAY,
                    "Request to AI provider failed.".to_string(),
                ),
                PowerCastError::AiApi { status, .. } => (
                    StatusCode::BAD_GATEWAY,
                    format!("AI provider error (status {status})."),
                ),
                PowerCastError::AiDeserialization(_) => (
                    StatusCode::BAD_GATEWAY,
                    "Failed to deserialize AI provider response.".to_string(),
                ),
                PowerCastError::EmptyResponse => (
                    StatusCode::BAD_GATEWAY,
                    "The AI provider returned no answer.".to_string(),
                ),
                PowerCastError::MissingAiProvider
                | PowerCastError::MissingApiKey
                | PowerCastError::MissingApiUrl(_)
                | PowerCastError::UnsupportedProvider(_)
                | PowerCastError::ReqwestClientBuild(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server is not configured correctly.".to_string(),
                ),
            },
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = self.status_and_message();

        // Log the underlying error; the client only sees the generic message.
        match &self {
            AppError::PowerCast(PowerCastError::EmptyQuestion) => {
                warn!("Rejected request without a question")
            }
            AppError::PowerCast(err) => error!("PowerCastError: {:?}", err),
            AppError::Internal(err) => error!("Internal server error: {:?}", err),
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
