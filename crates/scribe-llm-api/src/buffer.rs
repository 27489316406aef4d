/// Editor document as seen by a generation run.
///
/// Both operations are whole-document. `replace_full_text` overwrites
/// whatever the buffer holds, including edits made while a stream is running.
pub trait EditorBuffer: Send {
    fn read_full_text(&self) -> String;

    fn replace_full_text(&mut self, text: &str);
}

/// In-memory buffer that counts the replacements it receives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryBuffer {
    text: String,
    replacements: usize,
}

impl MemoryBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            replacements: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of `replace_full_text` calls so far
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl EditorBuffer for MemoryBuffer {
    fn read_full_text(&self) -> String {
        self.text.clone()
    }

    fn replace_full_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.replacements += 1;
    }
}
