use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use scribe_llm_api::{FramingMode, GeneratorConfig, DEFAULT_ENDPOINT};
use scribe_models::DEFAULT_MODEL;

use crate::host::PluginHost;

/// Persisted plugin settings.
///
/// Every field has a default, so a partial stored object is merged over the
/// defaults when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribeSettings {
    pub endpoint: String,
    pub model: String,
    pub framing: FramingMode,
    pub verbose: bool,
    pub log_to_file: bool,
}

impl Default for ScribeSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            framing: FramingMode::default(),
            verbose: false,
            log_to_file: false,
        }
    }
}

impl ScribeSettings {
    /// Load from host storage, falling back to defaults
    pub fn load(host: &dyn PluginHost) -> Result<Self> {
        match host.load_data()? {
            Some(value) => serde_json::from_value(value).context("Failed to parse stored settings"),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, host: &mut dyn PluginHost) -> Result<()> {
        let value = serde_json::to_value(self)?;
        host.save_data(&value)
    }

    /// Client configuration these settings describe
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(&self.endpoint, self.model.clone()).with_framing(self.framing)
    }
}
