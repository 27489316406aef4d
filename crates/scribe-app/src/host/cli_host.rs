use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use super::{CommandSpec, PluginHost};

/// Terminal host: status and notices go to stderr, plugin data to `data.json`
pub struct CliHost {
    data_dir: PathBuf,
    commands: Vec<CommandSpec>,
    status: String,
    echo_status: bool,
}

impl CliHost {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            commands: Vec::new(),
            status: String::new(),
            echo_status: true,
        }
    }

    /// Print status changes (on by default)
    pub fn with_echo_status(mut self, echo: bool) -> Self {
        self.echo_status = echo;
        self
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("data.json")
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl PluginHost for CliHost {
    fn add_command(&mut self, command: CommandSpec) {
        self.commands.retain(|c| c.id != command.id);
        self.commands.push(command);
    }

    fn set_status_text(&mut self, text: &str) {
        if self.echo_status && !text.is_empty() && text != self.status {
            eprintln!("{} {}", "▌".bright_blue(), text.bright_blue());
        }
        self.status = text.to_string();
    }

    fn notice(&mut self, message: &str) {
        eprintln!("{}", format!("🔔 {}", message).bright_yellow().bold());
    }

    fn load_data(&self) -> Result<Option<serde_json::Value>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Some(value))
    }

    fn save_data(&mut self, data: &serde_json::Value) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;

        let path = self.data_file();
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
