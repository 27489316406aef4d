use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use scribe_llm_api::EditorBuffer;

/// Editor backed by a note on disk. Every replacement rewrites the file.
pub struct FileEditor {
    path: PathBuf,
    text: String,
}

impl FileEditor {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read note {}", path.display()))?;

        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EditorBuffer for FileEditor {
    fn read_full_text(&self) -> String {
        self.text.clone()
    }

    fn replace_full_text(&mut self, text: &str) {
        self.text = text.to_string();

        // The in-memory text stays authoritative, a failed write is reported only
        if let Err(e) = fs::write(&self.path, text) {
            eprintln!("{}", format!("Failed to write {}: {}", self.path.display(), e).red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_reads_note() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("note.md");
        fs::write(&path, "Met with Acme Corp").unwrap();

        let editor = FileEditor::open(&path).unwrap();
        assert_eq!(editor.read_full_text(), "Met with Acme Corp");
    }

    #[test]
    fn test_replace_rewrites_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("note.md");
        fs::write(&path, "old").unwrap();

        let mut editor = FileEditor::open(&path).unwrap();
        editor.replace_full_text("**Client Name:** Acme");
        editor.replace_full_text("**Client Name:** Acme Corp");

        assert_eq!(fs::read_to_string(&path).unwrap(), "**Client Name:** Acme Corp");
        assert_eq!(editor.read_full_text(), "**Client Name:** Acme Corp");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(FileEditor::open(tmp.path().join("missing.md")).is_err());
    }
}
