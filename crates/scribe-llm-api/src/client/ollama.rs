use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use scribe_logging::{log_request, log_request_to_file, log_transport_error, ChunkTranscript};
use scribe_models::GenerateRequest;

use crate::buffer::EditorBuffer;
use crate::client::{consume_fragments, GenerationClient, GenerationSummary, StreamDiagnostics};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::framing::fragment_stream;

/// Ollama `/api/generate` client with streaming enabled
pub struct OllamaClient {
    config: GeneratorConfig,
    client: reqwest::Client,
    verbose: bool,
    logs_dir: Option<PathBuf>,
}

impl OllamaClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        if let Err(e) = reqwest::Url::parse(&config.endpoint) {
            return Err(GenerationError::InvalidEndpoint {
                url: config.endpoint.clone(),
                reason: e.to_string(),
            });
        }

        Ok(Self {
            config,
            client: reqwest::Client::new(),
            verbose: false,
            logs_dir: None,
        })
    }

    /// Echo requests and chunks to the console
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Write request logs and chunk transcripts to `logs_dir`
    pub fn with_logs_dir(mut self, logs_dir: Option<PathBuf>) -> Self {
        self.logs_dir = logs_dir;
        self
    }

    fn diagnostics(&self) -> StreamDiagnostics {
        let transcript = self.logs_dir.as_ref().and_then(|dir| {
            ChunkTranscript::create(dir, &self.config.model)
                .map_err(|e| eprintln!("Failed to open chunk transcript: {}", e))
                .ok()
        });
        StreamDiagnostics::new(self.verbose, transcript)
    }

    async fn open_stream(&self, request: &GenerateRequest) -> Result<reqwest::Response, GenerationError> {
        let response = self.client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return Err(GenerationError::NoBody { status });
        }

        Ok(response)
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(
        &self,
        prompt: &str,
        buffer: &mut dyn EditorBuffer,
    ) -> Result<GenerationSummary, GenerationError> {
        let url = &self.config.endpoint;
        let request = GenerateRequest::streaming(&self.config.model, prompt);

        log_request(url, &request, self.verbose);

        if let Some(dir) = &self.logs_dir {
            let _ = log_request_to_file(dir, url, &request);
        }

        let response = match self.open_stream(&request).await {
            Ok(response) => response,
            Err(e) => {
                log_transport_error(url, &e);
                return Err(e);
            }
        };

        let events = fragment_stream(response.bytes_stream(), self.config.framing);
        let mut diagnostics = self.diagnostics();

        Ok(consume_fragments(events, buffer, &mut diagnostics).await)
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
