use serde::{Deserialize, Serialize};

use scribe_models::DEFAULT_MODEL;

/// Path of the streaming generate endpoint on an Ollama server
pub const GENERATE_PATH: &str = "/api/generate";

/// Default generate endpoint (local Ollama server)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// How decoded response text is cut into fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramingMode {
    /// Every decoded transport chunk must be exactly one JSON object
    #[default]
    Chunk,
    /// Decoded text is buffered and split on newlines (NDJSON)
    Lines,
}

impl FramingMode {
    /// Parse framing mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chunk" | "chunks" | "per-chunk" => Some(Self::Chunk),
            "lines" | "line" | "ndjson" => Some(Self::Lines),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Chunk => "chunk",
            Self::Lines => "lines",
        }
    }
}

/// Everything the streaming client needs to know about the server
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub framing: FramingMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            framing: FramingMode::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(endpoint: &str, model: impl Into<String>) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint),
            model: model.into(),
            framing: FramingMode::default(),
        }
    }

    pub fn with_framing(mut self, framing: FramingMode) -> Self {
        self.framing = framing;
        self
    }
}

/// Normalize an endpoint so it always names the generate path
///
/// `http://host:11434` and `http://host:11434/` both become
/// `http://host:11434/api/generate`. URLs that already carry an `/api/`
/// path are kept as they are, minus a trailing slash.
pub fn normalize_endpoint(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');

    if trimmed.ends_with(GENERATE_PATH) || trimmed.contains("/api/") {
        return trimmed.to_string();
    }

    format!("{}{}", trimmed, GENERATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_targets_local_server() {
        let config = GeneratorConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434/api/generate");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.framing, FramingMode::Chunk);
    }

    #[test]
    fn test_normalize_bare_server_url() {
        assert_eq!(normalize_endpoint("http://localhost:11434"), DEFAULT_ENDPOINT);
        assert_eq!(normalize_endpoint("http://localhost:11434/"), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_normalize_keeps_full_endpoint() {
        assert_eq!(normalize_endpoint(DEFAULT_ENDPOINT), DEFAULT_ENDPOINT);
        assert_eq!(
            normalize_endpoint("http://gpu-box:8080/api/generate/"),
            "http://gpu-box:8080/api/generate"
        );
        assert_eq!(
            normalize_endpoint("http://gpu-box:8080/api/v2/generate"),
            "http://gpu-box:8080/api/v2/generate"
        );
    }

    #[test]
    fn test_framing_aliases() {
        assert_eq!(FramingMode::from_str("chunk"), Some(FramingMode::Chunk));
        assert_eq!(FramingMode::from_str("Per-Chunk"), Some(FramingMode::Chunk));
        assert_eq!(FramingMode::from_str("NDJSON"), Some(FramingMode::Lines));
        assert_eq!(FramingMode::from_str("lines"), Some(FramingMode::Lines));
        assert_eq!(FramingMode::from_str("sse"), None);
    }

    #[test]
    fn test_framing_serde_names() {
        assert_eq!(serde_json::to_string(&FramingMode::Lines).unwrap(), "\"lines\"");
        let parsed: FramingMode = serde_json::from_str("\"chunk\"").unwrap();
        assert_eq!(parsed, FramingMode::Chunk);
    }
}
