pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::question::Question;

/// Ways a generation attempt can fail. All of them surface to the
/// orchestrator, which owns the retry; the generator never retries itself.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The generation service was unreachable or the transport broke mid-call.
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The generation service answered with a non-success status.
    #[error("generation service returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    /// The service answered successfully but produced no text at all.
    #[error("generation service returned no text")]
    EmptyResponse,
    /// The returned text does not decode as a question record.
    #[error("response does not decode as a question: {source}\nraw: {raw}")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Produces one question per call. Could be Gemini, or a test script.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self) -> Result<Question, GenerateError>;
}
