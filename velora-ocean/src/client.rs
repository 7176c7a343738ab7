//! reqwest implementation of [`AnalysisBackend`].
//!
//! No timeout or cancellation is configured: a request in flight only fails
//! when the transport itself gives up.

use crate::backend::{AnalysisBackend, BackendError};
use crate::config::ApiConfig;
use crate::reply::{QueryReply, QueryRequest};
use log::{debug, warn};
use reqwest::Client;

/// HTTP client for the Velora analysis backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl AnalysisBackend for HttpBackend {
    async fn ping(&self) -> Result<(), BackendError> {
        let url = self.config.endpoint("/");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            warn!("Liveness probe {} returned {}", url, response.status());
            return Err(BackendError::Status(response.status().as_u16()));
        }
        Ok(())
    }

    async fn query(&self, question: &str) -> Result<QueryReply, BackendError> {
        let url = self.config.endpoint("/query");
        debug!("POST {} ({} chars)", url, question.len());

        let response = self
            .client
            .post(&url)
            .json(&QueryRequest { question })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Query to {} returned {}", url, status);
            return Err(BackendError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        QueryReply::decode(&body)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            BackendError::Status(status.as_u16())
        } else if e.is_decode() {
            BackendError::Malformed(e.to_string())
        } else {
            BackendError::Unreachable(e.to_string())
        }
    }
}
