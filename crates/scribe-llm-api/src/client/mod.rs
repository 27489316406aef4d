use async_trait::async_trait;
use futures::{Stream, StreamExt};

use scribe_logging::{
    log_malformed_fragment,
    log_stream_chunk,
    log_stream_finished,
    log_stream_interrupted,
    ChunkTranscript,
};

use crate::buffer::EditorBuffer;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::framing::FragmentEvent;

pub mod ollama;

/// Result of one generation run that got a response stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationSummary {
    /// Concatenation of every applied fragment, in arrival order
    pub text: String,
    pub fragments_applied: usize,
    pub fragments_empty: usize,
    pub fragments_rejected: usize,
    /// Set when reading the body failed part way through
    pub interrupted: Option<String>,
}

impl GenerationSummary {
    /// True when the stream ran to its end
    pub fn completed(&self) -> bool {
        self.interrupted.is_none()
    }
}

/// Generation client trait - one streaming request per call
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send `prompt` and stream the generated text into `buffer`.
    ///
    /// On `Err` the buffer has not been touched.
    async fn generate(
        &self,
        prompt: &str,
        buffer: &mut dyn EditorBuffer,
    ) -> Result<GenerationSummary, GenerationError>;

    fn config(&self) -> &GeneratorConfig;
}

/// Per-stream diagnostics: verbose chunk echo and an optional transcript file
pub struct StreamDiagnostics {
    verbose: bool,
    transcript: Option<ChunkTranscript>,
    chunk_counter: usize,
}

impl StreamDiagnostics {
    pub fn new(verbose: bool, transcript: Option<ChunkTranscript>) -> Self {
        Self {
            verbose,
            transcript,
            chunk_counter: 0,
        }
    }

    /// Diagnostics that only report failures
    pub fn quiet() -> Self {
        Self::new(false, None)
    }

    fn observe(&mut self, raw: &str, accepted: bool) -> usize {
        self.chunk_counter += 1;
        log_stream_chunk(self.chunk_counter, raw, self.verbose);

        if let Some(transcript) = self.transcript.as_mut() {
            if let Err(e) = transcript.record(raw, accepted) {
                eprintln!("Failed to record stream chunk: {}", e);
            }
        }

        self.chunk_counter
    }
}

/// Apply fragment events to `buffer` until the stream ends.
///
/// Every text fragment is appended to the accumulated result and the buffer
/// is overwritten with the whole result. Empty and malformed fragments leave
/// both untouched; malformed ones are logged and skipped.
pub async fn consume_fragments<S>(
    events: S,
    buffer: &mut dyn EditorBuffer,
    diagnostics: &mut StreamDiagnostics,
) -> GenerationSummary
where
    S: Stream<Item = FragmentEvent>,
{
    futures::pin_mut!(events);
    let mut summary = GenerationSummary::default();

    while let Some(event) = events.next().await {
        match event {
            FragmentEvent::Text { raw, text } => {
                diagnostics.observe(&raw, true);
                summary.text.push_str(&text);
                buffer.replace_full_text(&summary.text);
                summary.fragments_applied += 1;
            }
            FragmentEvent::Empty { raw } => {
                diagnostics.observe(&raw, true);
                summary.fragments_empty += 1;
            }
            FragmentEvent::Malformed { raw, error } => {
                let chunk_num = diagnostics.observe(&raw, false);
                log_malformed_fragment(chunk_num, &raw, &error);
                summary.fragments_rejected += 1;
            }
            FragmentEvent::Interrupted(reason) => {
                log_stream_interrupted(&reason, summary.fragments_applied);
                summary.interrupted = Some(reason);
            }
        }
    }

    if summary.completed() {
        log_stream_finished(summary.fragments_applied, summary.fragments_rejected, diagnostics.verbose);
    }

    summary
}
