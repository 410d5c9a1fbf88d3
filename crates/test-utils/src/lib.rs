use async_trait::async_trait;
use powercast::errors::PowerCastError;
use powercast::providers::ai::AiProvider;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// What the mock returns on each call.
#[derive(Clone, Debug)]
pub enum MockReply {
    Text(String),
    Timeout,
    Authentication,
    QuotaExceeded,
    Api(u16),
    Empty,
}

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    reply: Arc<Mutex<MockReply>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A mock that always answers with `text`.
    pub fn with_text(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }

    /// Replaces the programmed reply.
    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::with_text("mock answer")
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PowerCastError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        let reply = self.reply.lock().unwrap().clone();

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::Timeout => Err(PowerCastError::AiTimeout),
            MockReply::Authentication => Err(PowerCastError::AiAuthentication(
                "MockAiProvider: invalid key".to_string(),
            )),
            MockReply::QuotaExceeded => Err(PowerCastError::AiQuotaExceeded(
                "MockAiProvider: quota exhausted".to_string(),
            )),
            MockReply::Api(status) => Err(PowerCastError::AiApi {
                status,
                message: format!("MockAiProvider: status {status}"),
            }),
            MockReply::Empty => Err(PowerCastError::EmptyResponse),
        }
    }
}
