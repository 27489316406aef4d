use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use chrono::Local;
use serde_json::json;

use crate::request_logger::file_safe_model_name;

/// Append-only JSONL record of every decoded chunk of one response stream
pub struct ChunkTranscript {
    path: PathBuf,
    file: File,
    chunks: usize,
}

impl ChunkTranscript {
    /// Create a transcript file in `logs_dir` for a stream from `model`
    pub fn create(logs_dir: &Path, model: &str) -> Result<Self> {
        std::fs::create_dir_all(logs_dir)
            .context("Failed to create log directory")?;

        let path = logs_dir.join(format!(
            "chunks-{}-{}.jsonl",
            Local::now().format("%Y%m%d-%H%M%S%.3f"),
            file_safe_model_name(model)
        ));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to create transcript {}", path.display()))?;

        Ok(Self { path, file, chunks: 0 })
    }

    /// Record one decoded chunk and whether it was accepted as a fragment
    pub fn record(&mut self, data: &str, accepted: bool) -> Result<()> {
        self.chunks += 1;
        let entry = json!({
            "timestamp": Local::now().to_rfc3339(),
            "seq": self.chunks,
            "accepted": accepted,
            "data": data,
        });
        writeln!(self.file, "{}", entry)
            .context("Failed to write to transcript")?;
        self.file.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn chunks(&self) -> usize {
        self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_one_line_per_chunk() {
        let tmp = tempfile::tempdir().unwrap();
        let mut transcript = ChunkTranscript::create(tmp.path(), "llama3").unwrap();

        transcript.record(r#"{"response":"a"}"#, true).unwrap();
        transcript.record("not json", false).unwrap();

        let content = std::fs::read_to_string(transcript.path()).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(transcript.chunks(), 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["accepted"], true);
        assert_eq!(lines[1]["data"], "not json");
        assert_eq!(lines[1]["seq"], 2);
    }
}
