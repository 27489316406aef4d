use serde::{Deserialize, Serialize};

/// Generate API request structure
///
/// Sent once per invocation. `stream` is always `true` for requests built
/// through [`GenerateRequest::streaming`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn streaming(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: true,
        }
    }
}
