//! HTTP completion client for OpenAI-compatible chat endpoints.
//!
//! # Invariants
//! - Every request carries the configured deadline; exceeding it maps to
//!   `AssistantError::Timeout`, everything else to `Service` or
//!   `InvalidResponse`.
//! - One attempt per call.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::assistant::{
    AssistantError, AssistantResult, CompletionBackend, CompletionRequest, CompletionResponse,
};

/// Default request deadline.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default generation model.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

/// Blocking client against a `/chat/completions` endpoint.
///
/// The engine is single-threaded and run-to-completion, so the call blocks
/// the caller; the deadline bounds how long.
pub struct HttpCompletionClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpCompletionClient {
    /// Builds a client with the default model and timeout.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> AssistantResult<Self> {
        Self::with_config(
            base_url,
            api_key,
            DEFAULT_MODEL.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_config(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> AssistantResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AssistantError::Service {
                status: None,
                message: format!("failed to build HTTP client: {err}"),
            })?;

        let base_url = base_url.into();
        info!(
            "event=assistant_init module=assistant status=ok base_url={base_url} model={model} timeout_secs={}",
            timeout.as_secs()
        );

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
        })
    }
}

impl CompletionBackend for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> AssistantResult<CompletionResponse> {
        let system = format!(
            "You are a helpful AI study assistant. Be concise, clear, and structured. Subject: {}.",
            request.subject
        );
        let body = ChatCompletionBody {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: 0.2,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let mut http_request = self.client.post(&url).json(&body);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request.send().map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AssistantError::Service {
                status: Some(status.as_u16()),
                message,
            });
        }

        let reply: ChatCompletionReply = response.json().map_err(|err| {
            AssistantError::InvalidResponse(format!("body is not valid JSON: {err}"))
        })?;

        let generated_text = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AssistantError::InvalidResponse("no completion choice in body".to_string())
            })?;

        Ok(CompletionResponse { generated_text })
    }
}

fn map_transport_error(err: reqwest::Error) -> AssistantError {
    if err.is_timeout() {
        AssistantError::Timeout
    } else {
        AssistantError::Service {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}
