//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use velora_cache::QueryCache;
use velora_chat::{Begin, ConnectionStatus, Dispatcher};
use velora_ocean::client::HttpBackend;
use velora_ocean::{AnalysisBackend, ApiConfig};

/// Shared application state for the Velora dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Conversation log, dispatch phase and query cache
    pub dispatcher: Signal<Dispatcher>,
    /// Result of the startup liveness probe
    pub connection: Signal<ConnectionStatus>,
    /// Chat input buffer
    pub input: Signal<String>,
    /// Backend client shared by every dispatch
    pub backend: Signal<HttpBackend>,
}

impl AppState {
    /// Create a new AppState talking to the backend at `config`.
    pub fn new(config: ApiConfig, cache_capacity: usize) -> Self {
        Self {
            dispatcher: Signal::new(Dispatcher::new(QueryCache::new(cache_capacity))),
            connection: Signal::new(ConnectionStatus::Unknown),
            input: Signal::new(String::new()),
            backend: Signal::new(HttpBackend::new(config)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.dispatcher.read().conversation().is_loading()
    }

    /// Probe the backend once and record the result.
    pub fn check_connection(mut self) {
        let backend = self.backend.read().clone();
        spawn(async move {
            let status = ConnectionStatus::probe(&backend).await;
            log::info!("{}", status.label());
            self.connection.set(status);
        });
    }

    /// Submit `text` as a question.
    ///
    /// Cache hits resolve immediately; misses suspend on the backend in a
    /// spawned task while the rest of the interface keeps running.
    pub fn send_query(mut self, text: String) {
        let begin = self.dispatcher.write().begin(&text);
        match begin {
            Begin::Ignored => log::debug!("Ignoring blank question"),
            Begin::Cached => self.input.set(String::new()),
            Begin::Fetch(pending) => {
                self.input.set(String::new());
                let backend = self.backend.read().clone();
                spawn(async move {
                    let outcome = backend.query(pending.query()).await;
                    self.dispatcher.write().complete(pending, outcome);
                });
            }
        }
    }
}
