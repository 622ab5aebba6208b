//! ChatProvider trait definition.
//!
//! Uses RPITIT for `complete` and `Pin<Box<dyn Stream>>` for `stream`, so a
//! streaming response can outlive the borrow of the provider.

use std::pin::Pin;

use futures_util::Stream;

use molt_types::llm::{ChatError, CompletionRequest, StreamEvent};

/// Trait for chat-completion backends.
///
/// Implementations live in molt-infra (e.g., `PollinationsProvider`).
pub trait ChatProvider: Send + Sync {
    /// Human-readable provider name (e.g., "pollinations").
    fn name(&self) -> &str;

    /// Send a request and receive the whole reply text.
    ///
    /// A response missing `choices[0].message.content` is an error.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<String, ChatError>> + Send;

    /// Send a streaming request. Yields decoded frames in arrival order.
    ///
    /// Undecodable frames are yielded as [`StreamEvent::Malformed`] rather
    /// than ending the stream; transport failures end it with an `Err`.
    fn stream(
        &self,
        request: CompletionRequest,
    ) -> Pin<Box<dyn Stream<Item = Result<StreamEvent, ChatError>> + Send + 'static>>;
}
