#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use futures::stream;

use scribe::llm_api::{
    consume_fragments, fragment_stream, EditorBuffer, FramingMode, GenerationClient,
    GenerationError, GenerationSummary, GeneratorConfig, StreamDiagnostics,
};
use scribe::{ClientFactory, CommandSpec, PluginHost, ScribeSettings};

/// In-memory host that records everything the plugin does
#[derive(Default)]
pub struct RecordingHost {
    pub commands: Vec<CommandSpec>,
    pub status_history: Vec<String>,
    pub notices: Vec<String>,
    pub data: Option<serde_json::Value>,
    pub saves: usize,
}

impl RecordingHost {
    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn status(&self) -> &str {
        self.status_history.last().map(String::as_str).unwrap_or("")
    }
}

impl PluginHost for RecordingHost {
    fn add_command(&mut self, command: CommandSpec) {
        self.commands.push(command);
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_history.push(text.to_string());
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn load_data(&self) -> Result<Option<serde_json::Value>> {
        Ok(self.data.clone())
    }

    fn save_data(&mut self, data: &serde_json::Value) -> Result<()> {
        self.data = Some(data.clone());
        self.saves += 1;
        Ok(())
    }
}

/// Client that replays canned body chunks instead of calling a server
pub struct StubClient {
    config: GeneratorConfig,
    chunks: Vec<Vec<u8>>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn new(framing: FramingMode, chunks: &[&str]) -> Self {
        Self {
            config: GeneratorConfig::default().with_framing(framing),
            chunks: chunks.iter().map(|c| c.as_bytes().to_vec()).collect(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GenerationClient for StubClient {
    async fn generate(
        &self,
        prompt: &str,
        buffer: &mut dyn EditorBuffer,
    ) -> Result<GenerationSummary, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let chunks: Vec<Result<Vec<u8>, String>> = self.chunks.iter().cloned().map(Ok).collect();
        let events = fragment_stream(stream::iter(chunks), self.config.framing);
        Ok(consume_fragments(events, buffer, &mut StreamDiagnostics::quiet()).await)
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Factory handing out one shared stub client
pub struct StubFactory {
    pub client: Arc<StubClient>,
}

impl StubFactory {
    pub fn boxed(client: &Arc<StubClient>) -> Box<dyn ClientFactory> {
        Box::new(Self { client: client.clone() })
    }
}

impl ClientFactory for StubFactory {
    fn create(&self, _settings: &ScribeSettings) -> Result<Arc<dyn GenerationClient>> {
        Ok(self.client.clone())
    }
}
