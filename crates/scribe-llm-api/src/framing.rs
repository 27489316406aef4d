use std::fmt::Display;

use async_stream::stream;
use futures::{Stream, StreamExt};
use scribe_models::GenerationFragment;

use crate::config::FramingMode;
use crate::decoder::Utf8ChunkDecoder;

/// Outcome of decoding one unit of the response stream
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentEvent {
    /// Parsed fragment carrying text
    Text { raw: String, text: String },
    /// Parsed fragment without a `response` field
    Empty { raw: String },
    /// Unit that is not exactly one JSON object
    Malformed { raw: String, error: String },
    /// The body broke off with a transport error; nothing follows
    Interrupted(String),
}

impl FragmentEvent {
    fn classify(raw: String) -> Self {
        match GenerationFragment::parse(&raw) {
            Ok(fragment) => match fragment.response {
                Some(text) => FragmentEvent::Text { raw, text },
                None => FragmentEvent::Empty { raw },
            },
            Err(e) => FragmentEvent::Malformed {
                raw,
                error: e.to_string(),
            },
        }
    }
}

/// Turns raw body chunks into fragment events according to a [`FramingMode`]
#[derive(Debug)]
pub struct FragmentFramer {
    framing: FramingMode,
    decoder: Utf8ChunkDecoder,
    line_buffer: String,
}

impl FragmentFramer {
    pub fn new(framing: FramingMode) -> Self {
        Self {
            framing,
            decoder: Utf8ChunkDecoder::new(),
            line_buffer: String::new(),
        }
    }

    /// Feed one transport chunk
    pub fn push(&mut self, chunk: &[u8]) -> Vec<FragmentEvent> {
        let text = self.decoder.decode(chunk);

        match self.framing {
            FramingMode::Chunk => vec![FragmentEvent::classify(text)],
            FramingMode::Lines => {
                self.line_buffer.push_str(&text);
                self.drain_lines()
            }
        }
    }

    /// Flush whatever is left once the body has ended
    pub fn finish(&mut self) -> Vec<FragmentEvent> {
        let tail = self.decoder.finish();

        match self.framing {
            FramingMode::Chunk => {
                if tail.is_empty() {
                    Vec::new()
                } else {
                    vec![FragmentEvent::classify(tail)]
                }
            }
            FramingMode::Lines => {
                self.line_buffer.push_str(&tail);
                let mut events = self.drain_lines();
                let rest = std::mem::take(&mut self.line_buffer);
                if !rest.trim().is_empty() {
                    events.push(FragmentEvent::classify(rest));
                }
                events
            }
        }
    }

    fn drain_lines(&mut self) -> Vec<FragmentEvent> {
        let mut events = Vec::new();

        while let Some(pos) = self.line_buffer.find('\n') {
            let line: String = self.line_buffer.drain(..=pos).collect();
            if line.trim().is_empty() {
                continue;
            }
            events.push(FragmentEvent::classify(line));
        }

        events
    }
}

/// Decode a response body stream into fragment events
///
/// Ends after the body ends, or right after an [`FragmentEvent::Interrupted`]
/// when reading the body fails.
pub fn fragment_stream<S, B, E>(byte_stream: S, framing: FramingMode) -> impl Stream<Item = FragmentEvent>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    stream! {
        let byte_stream = byte_stream;
        futures::pin_mut!(byte_stream);
        let mut framer = FragmentFramer::new(framing);
        let mut interrupted = false;

        while let Some(chunk_result) = byte_stream.next().await {
            match chunk_result {
                Ok(chunk) => {
                    for event in framer.push(chunk.as_ref()) {
                        yield event;
                    }
                }
                Err(e) => {
                    yield FragmentEvent::Interrupted(e.to_string());
                    interrupted = true;
                    break;
                }
            }
        }

        if !interrupted {
            for event in framer.finish() {
                yield event;
            }
        }
    }
}
