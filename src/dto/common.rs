use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement such as `{"message": "Player deleted"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Inline error body returned with HTTP 200 when an update targets an unknown id.
#[derive(Debug, Serialize, ToSchema)]
pub struct InlineError {
    pub error: String,
}

/// Result of a by-id update: the stored record, or an inline error when nothing matched.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UpdateResponse<T> {
    Updated(T),
    Missing(InlineError),
}

impl<T> UpdateResponse<T> {
    /// Wrap an update outcome, naming the `kind` of record in the inline error.
    pub fn from_outcome(outcome: Option<T>, kind: &str) -> Self {
        match outcome {
            Some(record) => UpdateResponse::Updated(record),
            None => UpdateResponse::Missing(InlineError {
                error: format!("{kind} not found"),
            }),
        }
    }
}
