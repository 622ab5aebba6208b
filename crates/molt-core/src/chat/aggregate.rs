//! Fragment aggregation and the live-echo sink.
//!
//! Stream consumption has two consumers: [`Aggregator`] folds fragments into
//! the reply text and knows nothing about output, while a [`FragmentSink`]
//! sees each fragment as it arrives (typically to print it). Neither affects
//! the other.

use molt_types::llm::{ChatError, StreamEvent};

/// Pure left fold over stream events.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    text: String,
    fragments: usize,
    skipped: usize,
    done: bool,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns `false` once the stream should stop.
    pub fn apply(&mut self, event: &StreamEvent) -> bool {
        if self.done {
            return false;
        }
        match event {
            StreamEvent::Delta { text } => {
                self.text.push_str(text);
                self.fragments += 1;
            }
            StreamEvent::Malformed { .. } => self.skipped += 1,
            StreamEvent::Done => self.done = true,
        }
        !self.done
    }

    /// Whether the `[DONE]` sentinel has been seen.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Number of malformed frames skipped.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Observer of a chat call in progress.
pub trait FragmentSink: Send {
    /// Called once per text fragment, in arrival order.
    fn on_fragment(&mut self, text: &str);

    /// Called when the reply is complete (streamed or not).
    fn on_finish(&mut self) {}

    /// Called when the call fails; the caller still receives empty text.
    fn on_error(&mut self, _error: &ChatError) {}
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FragmentSink for NullSink {
    fn on_fragment(&mut self, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate<'a>(events: impl IntoIterator<Item = &'a StreamEvent>) -> String {
        let mut aggregator = Aggregator::new();
        for event in events {
            if !aggregator.apply(event) {
                break;
            }
        }
        aggregator.finish()
    }

    fn delta(text: &str) -> StreamEvent {
        StreamEvent::Delta {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_fragments_join_in_order() {
        let events = vec![delta("Hel"), delta("lo"), delta(" world"), StreamEvent::Done];
        assert_eq!(aggregate(&events), "Hello world");
    }

    #[test]
    fn test_malformed_frames_are_skipped() {
        let events = vec![
            delta("Hel"),
            StreamEvent::Malformed {
                reason: "expected value".to_string(),
            },
            delta("lo"),
            StreamEvent::Done,
        ];
        let mut aggregator = Aggregator::new();
        for event in &events {
            aggregator.apply(event);
        }
        assert_eq!(aggregator.skipped(), 1);
        assert_eq!(aggregator.fragments(), 2);
        assert!(aggregator.is_done());
        assert_eq!(aggregator.finish(), "Hello");
    }

    #[test]
    fn test_events_after_done_are_ignored() {
        let events = vec![delta("a"), StreamEvent::Done, delta("b")];
        assert_eq!(aggregate(&events), "a");
    }

    #[test]
    fn test_stream_without_sentinel_keeps_text() {
        let events = vec![delta("partial"), delta(" reply")];
        assert_eq!(aggregate(&events), "partial reply");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(aggregate(&[StreamEvent::Done]), "");
    }
}
