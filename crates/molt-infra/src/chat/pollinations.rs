//! PollinationsProvider -- concrete [`ChatProvider`] for the Pollinations
//! OpenAI-compatible chat endpoint (`POST {base_url}/chat/completions`).
//!
//! Supports whole-response (`complete`) and SSE streaming (`stream`) modes.
//! The endpoint works without credentials; an optional bearer token is held
//! in a [`SecretString`] and only exposed when building request headers.

use std::pin::Pin;
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use molt_core::chat::provider::ChatProvider;
use molt_types::config::ChatConfig;
use molt_types::llm::{ChatError, CompletionRequest, StreamEvent};

use super::sse::FrameDecoder;

/// Pollinations chat-completion provider.
pub struct PollinationsProvider {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

// PollinationsProvider intentionally does NOT derive Debug; the optional
// token must never end up in logs.

impl PollinationsProvider {
    /// Create a provider from the `[chat]` config section.
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token sent with every request.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn request_builder(&self, request: &CompletionRequest) -> reqwest::RequestBuilder {
        let builder = self.client.post(self.url()).json(request);
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }
}

impl ChatProvider for PollinationsProvider {
    fn name(&self) -> &str {
        "pollinations"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        let mut request = request.clone();
        request.stream = false;

        let response = self
            .request_builder(&request)
            .send()
            .await
            .map_err(|e| ChatError::Transport(format!("HTTP request failed: {e}")))?;
        let response = check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(format!("response body read: {e}")))?;
        parse_completion(&body)
    }

    fn stream(
        &self,
        mut request: CompletionRequest,
    ) -> Pin<Box<dyn Stream<Item = Result<StreamEvent, ChatError>> + Send + 'static>> {
        request.stream = true;
        let builder = self.request_builder(&request);

        Box::pin(async_stream::try_stream! {
            let response = builder
                .send()
                .await
                .map_err(|e| ChatError::Transport(format!("HTTP request failed: {e}")))?;
            let response = check_status(response).await?;

            let mut body = response.bytes_stream();
            let mut decoder = FrameDecoder::new();
            let mut done = false;
            while let Some(chunk) = body.next().await {
                let chunk = chunk.map_err(|e| ChatError::Stream(format!("response body read: {e}")))?;
                for event in decoder.feed(&chunk) {
                    done = event == StreamEvent::Done;
                    yield event;
                    if done {
                        break;
                    }
                }
                if done {
                    break;
                }
            }

            if !done {
                if let Some(event) = decoder.finish() {
                    yield event;
                }
            }
        })
    }
}

/// Map a non-success response to a [`ChatError`], consuming its body.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ChatError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    tracing::warn!(status = %status, body = %error_body, "chat API error response");
    Err(match status.as_u16() {
        401 | 403 => ChatError::AuthenticationFailed,
        429 => ChatError::RateLimited,
        code => ChatError::Status {
            status: code,
            body: error_body,
        },
    })
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a whole-response body.
fn parse_completion(body: &str) -> Result<String, ChatError> {
    let parsed: CompletionBody = serde_json::from_str(body)
        .map_err(|e| ChatError::Deserialization(format!("failed to parse response: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            ChatError::Deserialization("response has no choices[0].message.content".to_string())
        })
}
