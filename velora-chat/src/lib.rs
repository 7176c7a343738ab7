//! Conversation state and query dispatch for the Velora ocean assistant.
//!
//! - `conversation`: the append-only message log and dispatch phase
//! - `dispatcher`: cache-first query dispatch against an `AnalysisBackend`
//! - `summary`: the chat message written for an answer
//! - `suggestions`: example questions for an empty conversation

pub mod conversation;
pub mod dispatcher;
pub mod suggestions;
pub mod summary;

pub use conversation::{Conversation, Message, Phase, Role};
pub use dispatcher::{Begin, Dispatcher, Outcome, PendingQuery, UNREACHABLE_MESSAGE};

use velora_ocean::AnalysisBackend;

/// Backend reachability as shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Offline,
}

impl ConnectionStatus {
    /// Run the liveness probe once.
    pub async fn probe<B: AnalysisBackend>(backend: &B) -> Self {
        match backend.ping().await {
            Ok(()) => ConnectionStatus::Connected,
            Err(e) => {
                log::warn!("Liveness probe failed: {}", e);
                ConnectionStatus::Offline
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn label(&self) -> &'static str {
        if self.is_connected() {
            "Backend Connected"
        } else {
            "Backend Offline"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velora_ocean::{BackendError, QueryReply};

    struct Probe(Result<(), BackendError>);

    impl AnalysisBackend for Probe {
        async fn ping(&self) -> Result<(), BackendError> {
            self.0.clone()
        }

        async fn query(&self, _question: &str) -> Result<QueryReply, BackendError> {
            Err(BackendError::Status(404))
        }
    }

    #[tokio::test]
    async fn probe_sets_status() {
        let status = ConnectionStatus::probe(&Probe(Ok(()))).await;
        assert_eq!(status, ConnectionStatus::Connected);
        assert_eq!(status.label(), "Backend Connected");

        let status = ConnectionStatus::probe(&Probe(Err(BackendError::Status(500)))).await;
        assert_eq!(status, ConnectionStatus::Offline);
        assert_eq!(status.label(), "Backend Offline");
    }

    #[test]
    fn unknown_reads_offline() {
        assert_eq!(ConnectionStatus::default().label(), "Backend Offline");
    }
}
