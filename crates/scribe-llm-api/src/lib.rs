//! # scribe-llm-api
//!
//! Streaming client for a local text-generation server (Ollama's
//! `/api/generate` endpoint).
//!
//! ## Features
//!
//! - **Streaming**: the response body is consumed chunk by chunk and every
//!   parsed fragment is pushed into an [`EditorBuffer`] as it arrives
//! - **Stateful UTF-8 decoding**: multi-byte characters split across chunks
//!   are reassembled
//! - **Fault tolerance**: malformed fragments are logged and skipped, the
//!   stream keeps going
//! - **Explicit configuration**: endpoint, model and framing live in a
//!   [`GeneratorConfig`] handed to the client at construction
//!
//! ## Example
//!
//! ```rust,no_run
//! use scribe_llm_api::{GeneratorConfig, GenerationClient, MemoryBuffer, OllamaClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OllamaClient::new(GeneratorConfig::default())?;
//!     let mut buffer = MemoryBuffer::new("Met with Acme Corp");
//!
//!     let summary = client.generate("Rewrite this note", &mut buffer).await?;
//!     println!("{} fragments applied", summary.fragments_applied);
//!
//!     Ok(())
//! }
//! ```

pub mod buffer;
pub mod client;
pub mod config;
pub mod decoder;
pub mod error;
pub mod framing;


// Re-export commonly used types
pub use buffer::{EditorBuffer, MemoryBuffer};

pub use client::{
    consume_fragments,
    GenerationClient,
    GenerationSummary,
    StreamDiagnostics,
    ollama::OllamaClient,
};

pub use config::{
    FramingMode,
    GeneratorConfig,
    DEFAULT_ENDPOINT,
    GENERATE_PATH,
    normalize_endpoint,
};

pub use decoder::Utf8ChunkDecoder;
pub use error::GenerationError;
pub use framing::{fragment_stream, FragmentEvent, FragmentFramer};
