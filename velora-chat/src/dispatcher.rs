//! Query dispatch: cache lookup, backend call, and conversation updates.
//!
//! A dispatch runs in two synchronous halves around the one suspending step,
//! the backend call:
//!
//! 1. [`Dispatcher::begin`] validates the text, logs the user message, enters
//!    the pending phase and answers from the cache when it can.
//! 2. [`Dispatcher::complete`] folds the backend outcome into the
//!    conversation and, for answers, into the cache.
//!
//! UI event loops hold the dispatcher in reactive state and await the backend
//! between the halves; [`Dispatcher::submit`] composes them for native callers.
//! No error escapes a dispatch: every outcome ends as a chat message and the
//! pending phase is always left.
//!
//! Nothing stops two dispatches from being in flight at once when driven
//! programmatically. Their messages land in completion order and the first
//! completion ends the pending phase.

use crate::conversation::Conversation;
use crate::summary::format_summary;
use log::{debug, info, warn};
use velora_cache::QueryCache;
use velora_ocean::{AnalysisBackend, BackendError, QueryReply};

/// Chat text for any transport-level failure.
pub const UNREACHABLE_MESSAGE: &str =
    "⚠️ Backend unreachable. Make sure the analysis server is running.";

/// What the backend call produced.
pub type Outcome = Result<QueryReply, BackendError>;

/// Result of starting a dispatch.
#[derive(Debug, PartialEq, Eq)]
pub enum Begin {
    /// Blank input; nothing happened.
    Ignored,
    /// Answered from the cache; no backend call is needed.
    Cached,
    /// The backend must be asked.
    Fetch(PendingQuery),
}

/// A dispatch waiting on the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending query must be completed to leave the loading state"]
pub struct PendingQuery {
    query: String,
}

impl PendingQuery {
    /// The exact submitted text, which is also the cache key.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Owns the query cache and the conversation.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    cache: QueryCache,
    conversation: Conversation,
}

impl Dispatcher {
    pub fn new(cache: QueryCache) -> Self {
        Self {
            cache,
            conversation: Conversation::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Start a dispatch for the raw input text.
    pub fn begin(&mut self, text: &str) -> Begin {
        if text.trim().is_empty() {
            return Begin::Ignored;
        }

        self.conversation.submit(text);

        if let Some(hit) = self.cache.get(text) {
            debug!("Cache hit for {:?}", text);
            let summary = format_summary(&hit, true);
            self.conversation.answer(hit, summary);
            return Begin::Cached;
        }

        debug!("Cache miss for {:?}", text);
        Begin::Fetch(PendingQuery {
            query: text.to_string(),
        })
    }

    /// Finish a dispatch with the backend's outcome.
    pub fn complete(&mut self, pending: PendingQuery, outcome: Outcome) {
        match outcome {
            Ok(QueryReply::Answer(result)) => {
                let stored = self.cache.put(&pending.query, *result);
                info!(
                    "Answered {:?}: {} ({} records)",
                    pending.query, stored.region, stored.stats.count
                );
                let summary = format_summary(&stored, false);
                self.conversation.answer(stored, summary);
            }
            Ok(QueryReply::Rejected(rejection)) => {
                warn!(
                    "Backend rejected {:?}: {}",
                    pending.query, rejection.error
                );
                self.conversation.fail(rejection.display_text());
            }
            Err(e) => {
                warn!("Query {:?} failed: {}", pending.query, e);
                self.conversation.fail(UNREACHABLE_MESSAGE);
            }
        }
    }

    /// Run a whole dispatch against `backend`.
    pub async fn submit<B: AnalysisBackend>(&mut self, backend: &B, text: &str) {
        if let Begin::Fetch(pending) = self.begin(text) {
            let outcome = backend.query(pending.query()).await;
            self.complete(pending, outcome);
        }
    }
}
