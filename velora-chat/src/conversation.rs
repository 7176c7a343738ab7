//! Append-only chat log plus the dispatch phase.

use serde::Serialize;
use std::rc::Rc;
use velora_ocean::AnalysisResult;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// One entry in the chat log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn ai_error(text: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            text: text.into(),
            is_error: true,
        }
    }
}

/// Where the latest dispatch stands.
///
/// `Pending` is the loading state; `Answered` carries the result driving the
/// dashboard. Starting a new dispatch always leaves `Answered`, so the
/// displayed result is cleared before any new answer arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Pending { query: String },
    Answered(Rc<AnalysisResult>),
    Failed(String),
}

/// The running conversation.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    phase: Phase,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// The answer currently shown on the dashboard, if any.
    pub fn current_result(&self) -> Option<&Rc<AnalysisResult>> {
        match &self.phase {
            Phase::Answered(result) => Some(result),
            _ => None,
        }
    }

    pub(crate) fn submit(&mut self, query: &str) {
        self.messages.push(Message::user(query));
        self.phase = Phase::Pending {
            query: query.to_string(),
        };
    }

    pub(crate) fn answer(&mut self, result: Rc<AnalysisResult>, text: String) {
        self.messages.push(Message::ai(text));
        self.phase = Phase::Answered(result);
    }

    pub(crate) fn fail(&mut self, text: &str) {
        self.messages.push(Message::ai_error(text));
        self.phase = Phase::Failed(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_and_empty() {
        let conversation = Conversation::new();
        assert_eq!(conversation.phase(), &Phase::Idle);
        assert!(conversation.messages().is_empty());
        assert!(!conversation.is_loading());
        assert!(conversation.current_result().is_none());
    }

    #[test]
    fn test_submit_then_fail() {
        let mut conversation = Conversation::new();
        conversation.submit("Indian Ocean");
        assert!(conversation.is_loading());
        conversation.fail("Region not recognized");
        assert!(!conversation.is_loading());
        assert!(conversation.current_result().is_none());
        assert_eq!(
            conversation.messages(),
            &[
                Message::user("Indian Ocean"),
                Message::ai_error("Region not recognized"),
            ]
        );
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_string(&Message::ai_error("x")).unwrap();
        assert_eq!(json, r#"{"role":"ai","text":"x","isError":true}"#);
    }
}
