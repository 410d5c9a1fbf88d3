#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as tracing setup and
//! a scripted mock provider, to keep tests isolated and repeatable.

use async_trait::async_trait;
use dotenvy::dotenv;
use powercast::errors::PowerCastError;
use powercast::providers::ai::AiProvider;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// Returns a fixed response and records every prompt it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    pub response: Arc<Result<String, String>>,
}

impl MockAiProvider {
    pub fn new(response: &str) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            response: Arc::new(Ok(response.to_string())),
        }
    }

    /// A provider whose every call fails with an `AiApi` error.
    pub fn failing(message: &str) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            response: Arc::new(Err(message.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PowerCastError> {
        self.call_history.write().unwrap().push(prompt.to_string());
        match self.response.as_ref() {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(PowerCastError::AiApi {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
