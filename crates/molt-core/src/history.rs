//! Session conversation history with a bounded request window.

use molt_types::llm::Message;

/// Append-only record of the session's user and assistant turns.
///
/// Everything is kept for the life of the session, but only the most recent
/// `window` messages are replayed into a new chat request.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    messages: Vec<Message>,
    window: usize,
}

impl ConversationHistory {
    pub const DEFAULT_WINDOW: usize = 10;

    pub fn new(window: usize) -> Self {
        Self {
            messages: Vec::new(),
            window,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record one user prompt and the reply it produced (possibly empty).
    pub fn record_exchange(&mut self, user: &str, assistant: &str) {
        self.push(Message::user(user));
        self.push(Message::assistant(assistant));
    }

    /// The trailing window sent with the next request, oldest first.
    pub fn window(&self) -> &[Message] {
        let start = self.messages.len().saturating_sub(self.window);
        &self.messages[start..]
    }

    /// The full session record.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
