//! Decoding of `POST /query` response bodies.

use crate::analysis::AnalysisResult;
use crate::backend::BackendError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
}

/// A structurally valid reply from the analysis backend.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryReply {
    /// The backend answered the question.
    Answer(Box<AnalysisResult>),
    /// The backend understood the request but could not answer it.
    Rejected(Rejection),
}

/// A soft error: `{error, message?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl Rejection {
    pub fn new(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            error: error.into(),
            message,
        }
    }

    /// Text shown to the user: the message when it has content, else the error code.
    pub fn display_text(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => &self.error,
        }
    }
}

impl QueryReply {
    /// Decode a response body.
    ///
    /// Any body whose `error` member is set (non-null, non-false, non-empty)
    /// is a rejection. Everything else must decode as an [`AnalysisResult`];
    /// a body that does neither is malformed.
    pub fn decode(body: &str) -> Result<Self, BackendError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, BackendError> {
        if !value.is_object() {
            return Err(BackendError::Malformed(
                "reply is not a JSON object".to_string(),
            ));
        }

        if let Some(error) = value.get("error").and_then(error_text) {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Ok(QueryReply::Rejected(Rejection::new(error, message)));
        }

        serde_json::from_value::<AnalysisResult>(value)
            .map(|result| QueryReply::Answer(Box::new(result)))
            .map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

/// The error text of an `error` member, or `None` when it is unset.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
