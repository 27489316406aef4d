use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Streaming Response Structures
// ============================================================================

/// One decoded unit of a streaming generate response.
///
/// Only `response` carries text. The remaining fields are informational and
/// any other field the server adds is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationFragment {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl GenerationFragment {
    /// Parse exactly one JSON object from `text`.
    ///
    /// Surrounding whitespace is accepted, trailing content (a second object,
    /// garbage) is not. Any other JSON value (array, string, number, null)
    /// is an error.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(text)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde_json::Error::custom("fragment is not a JSON object")),
        }
    }

    /// Text carried by this fragment, if any
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref()
    }
}
