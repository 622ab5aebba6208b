//! Chat client: request assembly and failure containment.
//!
//! `ChatClient` turns a message list into a `CompletionRequest`, drives the
//! provider in streaming or whole-response mode and folds the result into
//! text. Every failure (transport, HTTP status, undecodable response,
//! mid-stream read error) is logged, reported to the sink and turned into
//! empty text, which downstream code treats as "no decision available".

use futures_util::StreamExt;
use tracing::{Instrument, debug, info_span, warn};

use molt_types::config::ChatConfig;
use molt_types::llm::{ChatError, CompletionRequest, Message, StreamEvent};

use super::aggregate::{Aggregator, FragmentSink};
use super::provider::ChatProvider;

/// Sends role-tagged conversations to a [`ChatProvider`].
pub struct ChatClient<P> {
    provider: P,
    model: String,
    temperature: f64,
    reasoning_effort: Option<String>,
    streaming: bool,
}

impl<P: ChatProvider> ChatClient<P> {
    /// Build a client from the `[chat]` config section.
    pub fn new(provider: P, config: &ChatConfig) -> Self {
        let reasoning_effort = Some(config.reasoning_effort.trim())
            .filter(|effort| !effort.is_empty())
            .map(str::to_string);

        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            reasoning_effort,
            streaming: config.streaming,
        }
    }

    /// Whether replies are streamed by default.
    pub fn streaming(&self) -> bool {
        self.streaming
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Complete using the configured delivery mode.
    pub async fn complete<K>(&self, messages: Vec<Message>, sink: &mut K) -> String
    where
        K: FragmentSink + ?Sized,
    {
        self.complete_with(messages, self.streaming, sink).await
    }

    /// Complete with an explicit delivery mode. Returns empty text on failure.
    pub async fn complete_with<K>(
        &self,
        messages: Vec<Message>,
        streaming: bool,
        sink: &mut K,
    ) -> String
    where
        K: FragmentSink + ?Sized,
    {
        let request = self.build_request(messages, streaming);

        let span = info_span!(
            "gen_ai.chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.temperature = request.temperature,
            gen_ai.request.stream = streaming,
            gen_ai.request.messages = request.messages.len(),
        );

        let result = if streaming {
            self.run_streaming(request, sink).instrument(span).await
        } else {
            self.run_complete(&request, sink).instrument(span).await
        };

        match result {
            Ok(text) => {
                sink.on_finish();
                text
            }
            Err(err) => {
                warn!(error = %err, provider = self.provider.name(), "chat request failed");
                sink.on_error(&err);
                String::new()
            }
        }
    }

    fn build_request(&self, messages: Vec<Message>, stream: bool) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            reasoning_effort: self.reasoning_effort.clone(),
            stream,
        }
    }

    async fn run_complete<K>(
        &self,
        request: &CompletionRequest,
        sink: &mut K,
    ) -> Result<String, ChatError>
    where
        K: FragmentSink + ?Sized,
    {
        let text = self.provider.complete(request).await?;
        if !text.is_empty() {
            sink.on_fragment(&text);
        }
        Ok(text)
    }

    async fn run_streaming<K>(
        &self,
        request: CompletionRequest,
        sink: &mut K,
    ) -> Result<String, ChatError>
    where
        K: FragmentSink + ?Sized,
    {
        let mut stream = self.provider.stream(request);
        let mut aggregator = Aggregator::new();

        while let Some(event) = stream.next().await {
            let event = event?;
            match &event {
                StreamEvent::Delta { text } => sink.on_fragment(text),
                StreamEvent::Malformed { reason } => {
                    debug!(%reason, "skipping malformed stream frame");
                }
                StreamEvent::Done => {}
            }
            if !aggregator.apply(&event) {
                break;
            }
        }

        debug!(
            fragments = aggregator.fragments(),
            skipped = aggregator.skipped(),
            done = aggregator.is_done(),
            "stream finished"
        );
        Ok(aggregator.finish())
    }
}
