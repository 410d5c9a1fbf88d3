//! # PowerCast Assistant
//!
//! This crate scopes a general-purpose language model to questions about the
//! PowerCast electricity-demand-forecasting platform. A question is wrapped in a
//! fixed instructional prompt, sent to a configurable AI provider, and the
//! provider's text is returned.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod relevance;
pub mod types;

pub use errors::PowerCastError;
pub use types::{PowerCastClient, PowerCastClientBuilder, ProviderConfig, Question};

use prompts::{build_prompt, REFUSAL_MESSAGE};
use relevance::matched_keywords;
use tracing::{debug, info};

impl PowerCastClient {
    /// Answers a question about the PowerCast platform.
    ///
    /// The relevance check always runs and is logged. It only short-circuits
    /// the model call when the relevance gate is enabled; otherwise off-topic
    /// handling is left to the prompt instructions.
    pub async fn ask(&self, question: &Question) -> Result<String, PowerCastError> {
        let matched = matched_keywords(question.as_str());
        let relevant = !matched.is_empty();
        debug!(?matched, relevant, "[ask] Relevance check");

        if self.relevance_gate && !relevant {
            info!("[ask] Relevance gate refused the question locally.");
            return Ok(REFUSAL_MESSAGE.to_string());
        }

        let prompt = build_prompt(question.as_str());
        info!(
            question_len = question.as_str().len(),
            prompt_len = prompt.len(),
            "[ask] Sending prompt to AI provider."
        );
        let response = self.ai_provider.generate(&prompt).await?;

        let answer = response.trim();
        if answer.is_empty() {
            return Err(PowerCastError::EmptyResponse);
        }
        Ok(answer.to_string())
    }
}
