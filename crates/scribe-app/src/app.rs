use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scribe_logging::default_scribe_dir;

use crate::cli::{Cli, Commands, GenerationArgs, SettingsCommands};
use crate::host::{CliHost, FileEditor};
use crate::plugin::{CommandOutcome, OllamaClientFactory, ScribePlugin, REWRITE_COMMAND};
use crate::prompt::build_prompt;
use crate::settings::ScribeSettings;

/// Resolve the data directory (CLI flag / SCRIBE_DATA_DIR > ~/.scribe)
pub fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_scribe_dir(),
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(&cli)?;

    match cli.command {
        Commands::Rewrite { file, generation } => run_rewrite(&data_dir, &file, &generation).await,
        Commands::Prompt { file } => {
            let note = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read note {}", file.display()))?;
            print!("{}", build_prompt(&note));
            Ok(())
        }
        Commands::Settings { command } => run_settings(&data_dir, command),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "scribe", &mut io::stdout());
            Ok(())
        }
    }
}

/// Load the plugin against a terminal host and run the rewrite command on `file`
pub async fn run_rewrite(data_dir: &Path, file: &Path, generation: &GenerationArgs) -> Result<()> {
    let mut host = CliHost::new(data_dir.to_path_buf());
    let mut plugin = ScribePlugin::load(&mut host, Box::new(OllamaClientFactory::new(data_dir.to_path_buf())))?;
    generation.apply_to(plugin.settings_mut())?;

    let mut editor = FileEditor::open(file)?;
    let outcome = plugin
        .execute_editor_command(&mut host, REWRITE_COMMAND.id, &mut editor)
        .await?;
    plugin.unload(&mut host);

    match outcome {
        CommandOutcome::Completed(summary) => {
            let line = format!(
                "✓ {}: {} fragment(s) applied, {} skipped",
                editor.path().display(),
                summary.fragments_applied,
                summary.fragments_rejected
            );
            if summary.completed() {
                println!("{}", line.bright_green());
            } else {
                println!("{}", line.yellow());
            }
            Ok(())
        }
        CommandOutcome::Failed(reason) => bail!("Note left unchanged: {}", reason),
    }
}

fn run_settings(data_dir: &Path, command: SettingsCommands) -> Result<()> {
    let mut host = CliHost::new(data_dir.to_path_buf()).with_echo_status(false);

    let settings = match command {
        SettingsCommands::Show => ScribeSettings::load(&host)?,
        SettingsCommands::Set(args) => {
            let mut plugin = ScribePlugin::load(&mut host, Box::new(OllamaClientFactory::new(data_dir.to_path_buf())))?;
            let mut updated = plugin.settings().clone();
            args.apply_to(&mut updated)?;
            plugin.update_settings(&mut host, |settings| *settings = updated)?;
            plugin.unload(&mut host);
            plugin.settings().clone()
        }
        SettingsCommands::Reset => {
            let settings = ScribeSettings::default();
            settings.save(&mut host)?;
            settings
        }
    };

    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
