//! # Ask Handler
//!
//! The single question-answering endpoint of the service.

use super::{AppError, AppState};
use crate::types::AskResponse;
use axum::{extract::State, Json};
use powercast::Question;
use serde_json::Value;
use tracing::info;

/// The handler for the `/ask` endpoint.
///
/// A `question` that is missing, not a string, or blank after trimming is
/// rejected with 400 before the model is called.
pub async fn ask_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AskResponse>, AppError> {
    let raw = payload
        .get("question")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let question = Question::parse(raw)?;
    info!(
        question_len = question.as_str().len(),
        provider = %app_state.config.ai.provider,
        model = %app_state.config.ai.model_name,
        "Received question."
    );

    let answer = app_state.client.ask(&question).await?;
    Ok(Json(AskResponse { answer }))
}
