//! Study-assistant completion boundary.
//!
//! # Responsibility
//! - Define the request/response contract for the external LLM call.
//! - Recover every backend failure into a user-facing fallback string so no
//!   raw transport error ever reaches a caller that renders text.
//!
//! # Invariants
//! - At most one attempt per call; no retries.
//! - Timeout is a distinct failure kind from service errors, so callers can
//!   message the two differently when they do want the error.

mod http;

pub use http::HttpCompletionClient;

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::warn;
use serde::{Deserialize, Serialize};

/// Canned answer shown when the backend fails. Mirrors the assistant's own
/// fallback wording so UI behavior stays uniform.
pub const FALLBACK_ANSWER: &str = "Sorry, I could not generate a response.";

/// One question for the assistant, scoped to a study subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub subject: String,
}

/// Successful assistant answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub generated_text: String,
}

pub type AssistantResult<T> = Result<T, AssistantError>;

/// Failure taxonomy of the external completion call.
#[derive(Debug)]
pub enum AssistantError {
    /// The call exceeded its deadline.
    Timeout,
    /// Non-2xx response or transport failure.
    Service {
        status: Option<u16>,
        message: String,
    },
    /// 2xx response whose body did not carry a usable answer.
    InvalidResponse(String),
}

impl Display for AssistantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "assistant request timed out"),
            Self::Service {
                status: Some(status),
                message,
            } => write!(f, "assistant service error (status {status}): {message}"),
            Self::Service {
                status: None,
                message,
            } => write!(f, "assistant service error: {message}"),
            Self::InvalidResponse(message) => {
                write!(f, "assistant returned an unusable response: {message}")
            }
        }
    }
}

impl Error for AssistantError {}

/// Contract implemented by completion backends.
///
/// The HTTP client is the production implementation; tests substitute stubs
/// the same way the repository traits allow elsewhere in the crate.
pub trait CompletionBackend {
    fn complete(&self, request: &CompletionRequest) -> AssistantResult<CompletionResponse>;
}

/// Asks the backend and recovers any failure into [`FALLBACK_ANSWER`].
///
/// Failures are logged at warn level before falling back, so operators see
/// them even though the caller only receives the canned string.
pub fn complete_with_fallback(
    backend: &impl CompletionBackend,
    request: &CompletionRequest,
) -> String {
    match backend.complete(request) {
        Ok(response) => response.generated_text,
        Err(err) => {
            let error_code = match &err {
                AssistantError::Timeout => "timeout",
                AssistantError::Service { .. } => "service_error",
                AssistantError::InvalidResponse(_) => "invalid_response",
            };
            warn!(
                "event=assistant_complete module=assistant status=error error_code={error_code} error={err}"
            );
            FALLBACK_ANSWER.to_string()
        }
    }
}
