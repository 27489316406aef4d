use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use scribe_llm_api::FramingMode;

use crate::settings::ScribeSettings;

/// CLI arguments for scribe
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Scribe - rewrite notes into a meeting template with a local LLM")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for stored settings (data.json) and logs. Default: ~/.scribe
    #[arg(long, value_name = "DIR", global = true, env = "SCRIBE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a note in place, streaming the model output into the file
    Rewrite {
        /// Path to the markdown note
        file: PathBuf,

        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// Print the prompt that would be sent for a note
    Prompt {
        /// Path to the markdown note
        file: PathBuf,
    },
    /// Show or change stored settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the stored settings
    Show,
    /// Change stored settings
    Set(SettingsSetArgs),
    /// Restore the defaults
    Reset,
}

/// Per-run overrides of the stored settings
#[derive(Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Generate endpoint (e.g., http://localhost:11434)
    #[arg(long, value_name = "URL", env = "SCRIBE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Model name sent with the request
    #[arg(long, value_name = "MODEL", env = "SCRIBE_MODEL")]
    pub model: Option<String>,

    /// How the response stream is split into fragments (chunk, lines)
    #[arg(long, value_name = "FRAMING", env = "SCRIBE_FRAMING")]
    pub framing: Option<String>,

    /// Echo the request and every stream chunk
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write request logs and chunk transcripts under the data directory
    #[arg(long)]
    pub log_to_file: bool,
}

impl GenerationArgs {
    pub fn apply_to(&self, settings: &mut ScribeSettings) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(framing) = &self.framing {
            settings.framing = parse_framing(framing)?;
        }
        settings.verbose |= self.verbose;
        settings.log_to_file |= self.log_to_file;
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsSetArgs {
    /// Generate endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Stream framing (chunk, lines)
    #[arg(long, value_name = "FRAMING")]
    pub framing: Option<String>,

    /// Echo requests and chunks
    #[arg(long, value_name = "BOOL")]
    pub verbose: Option<bool>,

    /// Write request logs and chunk transcripts
    #[arg(long, value_name = "BOOL")]
    pub log_to_file: Option<bool>,
}

impl SettingsSetArgs {
    pub fn apply_to(&self, settings: &mut ScribeSettings) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(framing) = &self.framing {
            settings.framing = parse_framing(framing)?;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(log_to_file) = self.log_to_file {
            settings.log_to_file = log_to_file;
        }
        Ok(())
    }
}

fn parse_framing(value: &str) -> Result<FramingMode> {
    FramingMode::from_str(value)
        .ok_or_else(|| {
            anyhow!(
                "Unknown framing '{}', expected '{}' or '{}'",
                value,
                FramingMode::Chunk.as_str(),
                FramingMode::Lines.as_str()
            )
        })
}
