pub mod mock;
pub mod telegram;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::question::Question;

/// Ways a publish attempt can fail. The result is returned to the
/// orchestrator so that dropping it there is a visible policy decision,
/// not something hidden inside the publisher.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The polling service was unreachable or the transport broke mid-call.
    #[error("poll submission failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The polling service answered with a non-success status.
    #[error("polling service returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    /// The options list could not be JSON-encoded for the form payload.
    #[error("failed to encode poll options: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Submits one question as a poll. Could be Telegram, or a test recorder.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, question: &Question) -> Result<(), PublishError>;
}
