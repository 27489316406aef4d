use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use scribe_llm_api::{EditorBuffer, GenerationClient, GenerationSummary, OllamaClient};
use scribe_logging::{get_logs_dir, log_transport_error};

use crate::host::{CommandSpec, PluginHost};
use crate::prompt::build_prompt;
use crate::settings::ScribeSettings;

pub const REWRITE_COMMAND: CommandSpec = CommandSpec {
    id: "rewrite-note",
    name: "Scribe: Rewrite Note with LLM.",
};

pub const STATUS_ENABLED: &str = "Scribe is enabled";
pub const STATUS_REWRITING: &str = "Scribe: rewriting note...";

/// Builds the generation client for the current settings
pub trait ClientFactory: Send + Sync {
    fn create(&self, settings: &ScribeSettings) -> Result<Arc<dyn GenerationClient>>;
}

/// Factory for the real Ollama client, logs go under `data_dir/logs`
pub struct OllamaClientFactory {
    data_dir: PathBuf,
}

impl OllamaClientFactory {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

impl ClientFactory for OllamaClientFactory {
    fn create(&self, settings: &ScribeSettings) -> Result<Arc<dyn GenerationClient>> {
        let logs_dir = if settings.log_to_file {
            Some(get_logs_dir(&self.data_dir)?)
        } else {
            None
        };

        let client = OllamaClient::new(settings.generator_config())?
            .with_verbose(settings.verbose)
            .with_logs_dir(logs_dir);

        Ok(Arc::new(client))
    }
}

/// How an editor command invocation ended
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A response stream was consumed (possibly cut short, see `interrupted`)
    Completed(GenerationSummary),
    /// Nothing was written to the editor
    Failed(String),
}

/// The note rewriting plugin
pub struct ScribePlugin {
    settings: ScribeSettings,
    factory: Box<dyn ClientFactory>,
}

impl ScribePlugin {
    /// Load settings and register everything with the host
    pub fn load(host: &mut dyn PluginHost, factory: Box<dyn ClientFactory>) -> Result<Self> {
        eprintln!("{}", "loading plugin".bright_black());

        let settings = ScribeSettings::load(host)?;
        host.add_command(REWRITE_COMMAND);
        host.set_status_text(STATUS_ENABLED);

        Ok(Self { settings, factory })
    }

    pub fn unload(&self, host: &mut dyn PluginHost) {
        eprintln!("{}", "unloading plugin".bright_black());
        host.set_status_text("");
    }

    pub fn settings(&self) -> &ScribeSettings {
        &self.settings
    }

    /// Change settings for this session only
    pub fn settings_mut(&mut self) -> &mut ScribeSettings {
        &mut self.settings
    }

    pub fn save_settings(&self, host: &mut dyn PluginHost) -> Result<()> {
        self.settings.save(host)
    }

    /// Change settings and persist them
    pub fn update_settings<F>(&mut self, host: &mut dyn PluginHost, update: F) -> Result<()>
    where
        F: FnOnce(&mut ScribeSettings),
    {
        update(&mut self.settings);
        self.save_settings(host)
    }

    /// Run a registered editor command against `editor`
    pub async fn execute_editor_command(
        &self,
        host: &mut dyn PluginHost,
        id: &str,
        editor: &mut dyn EditorBuffer,
    ) -> Result<CommandOutcome> {
        if id == REWRITE_COMMAND.id {
            Ok(self.rewrite_note(host, editor).await)
        } else {
            bail!("Unknown editor command: {}", id)
        }
    }

    async fn rewrite_note(&self, host: &mut dyn PluginHost, editor: &mut dyn EditorBuffer) -> CommandOutcome {
        let note = editor.read_full_text();
        let prompt = build_prompt(&note);

        let client = match self.factory.create(&self.settings) {
            Ok(client) => client,
            Err(e) => {
                log_transport_error(&self.settings.endpoint, &e);
                host.notice(&format!("Scribe: invalid configuration: {}", e));
                return CommandOutcome::Failed(e.to_string());
            }
        };

        host.set_status_text(&format!("{} ({})", STATUS_REWRITING, client.config().model));

        match client.generate(&prompt, editor).await {
            Ok(summary) => {
                match &summary.interrupted {
                    None => host.set_status_text(&format!(
                        "Scribe: note rewritten ({} fragments)",
                        summary.fragments_applied
                    )),
                    Some(reason) => {
                        host.notice(&format!("Scribe: response stream interrupted: {}", reason));
                        host.set_status_text(STATUS_ENABLED);
                    }
                }
                CommandOutcome::Completed(summary)
            }
            Err(e) => {
                host.notice(&format!("Scribe: generation failed: {}", e));
                host.set_status_text(STATUS_ENABLED);
                CommandOutcome::Failed(e.to_string())
            }
        }
    }
}
