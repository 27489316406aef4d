// Logging module - request, stream and failure diagnostics
pub mod chunk_transcript;
pub mod request_logger;

use std::path::{Path, PathBuf};
use anyhow::{Result, Context};

pub use chunk_transcript::ChunkTranscript;

// Re-export request logging functions
pub use request_logger::{
    log_request,
    log_request_to_file,
    log_stream_chunk,
    log_malformed_fragment,
    log_transport_error,
    log_stream_interrupted,
    log_stream_finished,
};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get the base scribe directory (~/.scribe) without creating it
pub fn default_scribe_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    Ok(PathBuf::from(home_dir).join(".scribe"))
}

/// Get or create the logs directory under `base`
pub fn get_logs_dir(base: &Path) -> Result<PathBuf> {
    let logs_dir = base.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;
    }

    Ok(logs_dir)
}
