//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `powercast-server`
//! integration tests.
//!
//! - `TestApp`: spawns the real router on a random port. The AI provider is either
//!   a `MockAiProvider` injected directly, or the provider built from a config
//!   that points at an `httpmock::MockServer`.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use powercast::providers::ai::AiProvider;
use powercast_server::{
    config::AppConfig,
    router,
    state::{build_app_state, AppState},
};
use powercast_test_utils::MockAiProvider;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a mock AI provider and default configuration.
    pub async fn spawn_with_mock(provider: MockAiProvider) -> Result<Self> {
        Self::spawn_with_provider(AppConfig::default(), Box::new(provider)).await
    }

    /// Spawns the server with an explicit configuration and AI provider.
    pub async fn spawn_with_provider(
        config: AppConfig,
        provider: Box<dyn AiProvider>,
    ) -> Result<Self> {
        let app_state = AppState::with_provider(config, provider)?;
        Self::spawn_with_state(app_state).await
    }

    /// Spawns the server with state built from `config`, as `start()` would.
    pub async fn spawn_from_config(config: AppConfig) -> Result<Self> {
        let app_state = build_app_state(config)?;
        Self::spawn_with_state(app_state).await
    }

    pub async fn spawn_with_state(app_state: AppState) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts a raw JSON value to `/ask`.
    pub async fn ask(&self, body: serde_json::Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}/ask", self.address))
            .json(&body)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
