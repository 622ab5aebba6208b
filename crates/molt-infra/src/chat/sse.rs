//! OpenAI-style SSE frame decoding.
//!
//! Each `data:` frame carries a JSON chunk whose text lives at
//! `choices[0].delta.content`; the literal `[DONE]` ends the stream.
//! Frames are cut from raw body bytes on blank lines and only then decoded
//! as UTF-8, so one corrupt frame becomes a single
//! [`StreamEvent::Malformed`] and its neighbours still decode.

use serde::Deserialize;

use molt_types::llm::StreamEvent;

/// Payload of the terminating frame.
pub const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct ChunkResponse {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: Option<ChunkDelta>,
}

#[derive(Debug, Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Decode one frame payload.
///
/// Returns `None` for frames that carry no text (role-only deltas, empty
/// choices, keep-alives). Invalid JSON becomes [`StreamEvent::Malformed`].
pub fn decode_frame(data: &str) -> Option<StreamEvent> {
    let data = data.trim();
    if data.is_empty() {
        return None;
    }
    if data == DONE_SENTINEL {
        return Some(StreamEvent::Done);
    }

    match serde_json::from_str::<ChunkResponse>(data) {
        Ok(chunk) => chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .and_then(|delta| delta.content)
            .filter(|text| !text.is_empty())
            .map(|text| StreamEvent::Delta { text }),
        Err(err) => Some(StreamEvent::Malformed {
            reason: err.to_string(),
        }),
    }
}

/// Incremental framing over raw response body chunks.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body chunk and decode every frame it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.buffer
            .extend(chunk.iter().copied().filter(|byte| *byte != b'\r'));

        let mut events = Vec::new();
        while let Some(end) = self.buffer.windows(2).position(|w| w == b"\n\n") {
            let frame: Vec<u8> = self.buffer.drain(..end + 2).collect();
            events.extend(decode_raw_frame(&frame[..end]));
        }
        events
    }

    /// Decode a trailing frame left when the body ends without a blank line.
    pub fn finish(self) -> Option<StreamEvent> {
        decode_raw_frame(&self.buffer)
    }
}

/// Join the `data:` lines of one raw frame and decode the payload.
fn decode_raw_frame(raw: &[u8]) -> Option<StreamEvent> {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(err) => {
            return Some(StreamEvent::Malformed {
                reason: format!("invalid UTF-8 in frame: {err}"),
            });
        }
    };

    let data: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|value| value.strip_prefix(' ').unwrap_or(value))
        .collect();
    if data.is_empty() {
        return None;
    }
    decode_frame(&data.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_frame() {
        let event = decode_frame(r#"{"choices":[{"index":0,"delta":{"content":"Hel"}}]}"#);
        assert_eq!(
            event,
            Some(StreamEvent::Delta {
                text: "Hel".to_string()
            })
        );
    }

    #[test]
    fn test_done_sentinel() {
        assert_eq!(decode_frame("[DONE]"), Some(StreamEvent::Done));
        assert_eq!(decode_frame(" [DONE] "), Some(StreamEvent::Done));
    }

    #[test]
    fn test_role_only_and_empty_frames_are_ignored() {
        assert_eq!(
            decode_frame(r#"{"choices":[{"delta":{"role":"assistant"}}]}"#),
            None
        );
        assert_eq!(decode_frame(r#"{"choices":[{"delta":{"content":""}}]}"#), None);
        assert_eq!(decode_frame(r#"{"choices":[]}"#), None);
        assert_eq!(decode_frame(r#"{"choices":[{"delta":{"content":null}}]}"#), None);
        assert_eq!(decode_frame(""), None);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            decode_frame("{not json"),
            Some(StreamEvent::Malformed { .. })
        ));
    }

    fn delta(text: &str) -> StreamEvent {
        StreamEvent::Delta {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_frame_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"data: {\"choices\":[{\"delta\":").is_empty());
        let events = decoder.feed(b"{\"content\":\"Hel\"}}]}\n\ndata: [DO");
        assert_eq!(events, vec![delta("Hel")]);
        assert_eq!(decoder.feed(b"NE]\n\n"), vec![StreamEvent::Done]);
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"data: {\"choices\":[{\"delta\":{\"content\":\"caf\xc3").is_empty());
        assert_eq!(decoder.feed(b"\xa9\"}}]}\n\n"), vec![delta("café")]);
    }

    #[test]
    fn test_invalid_utf8_frame_is_isolated() {
        let mut decoder = FrameDecoder::new();
        let events = decoder.feed(
            b"data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\n\
              data: {\"choices\":[{\"delta\":{\"content\":\"\xff\xfe\"}}]}\n\n\
              data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n\n",
        );
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], delta("Hel"));
        assert!(matches!(events[1], StreamEvent::Malformed { .. }));
        assert_eq!(events[2], delta("lo"));
    }

    #[test]
    fn test_crlf_comments_and_trailing_frame() {
        let mut decoder = FrameDecoder::new();
        let events = decoder.feed(
            b": keep-alive\r\n\r\nevent: message\r\ndata: {\"choices\":[{\"delta\":{\"content\":\"a\"}}]}\r\n\r\ndata: [DONE]",
        );
        assert_eq!(events, vec![delta("a")]);
        assert_eq!(decoder.finish(), Some(StreamEvent::Done));
    }
}
