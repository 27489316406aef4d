//! Scribe Application Library
//!
//! Plugin that rewrites the active note into a fixed meeting template by
//! streaming it through a local language model.

// Re-export workspace crates
pub use scribe_models as models;
pub use scribe_llm_api::{self as llm_api, EditorBuffer, GenerationClient, GenerationSummary, MemoryBuffer};

// Local modules
pub mod app;
pub mod cli;
pub mod host;
pub mod plugin;
pub mod prompt;
pub mod settings;

// Re-exports from local modules
pub use cli::{Cli, Commands, GenerationArgs, SettingsCommands, SettingsSetArgs};
pub use host::{CliHost, CommandSpec, FileEditor, PluginHost};
pub use plugin::{ClientFactory, CommandOutcome, OllamaClientFactory, ScribePlugin, REWRITE_COMMAND};
pub use prompt::{build_prompt, NOTE_TEMPLATE};
pub use settings::ScribeSettings;
