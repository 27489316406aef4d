use anyhow::Result;

pub mod cli_host;
pub mod file_editor;

pub use cli_host::CliHost;
pub use file_editor::FileEditor;

/// Editor command a plugin makes available to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub name: &'static str,
}

/// Capabilities the host application offers a plugin.
///
/// The plugin only registers things and reads or writes its stored data;
/// everything user-facing is up to the host.
pub trait PluginHost {
    fn add_command(&mut self, command: CommandSpec);

    fn set_status_text(&mut self, text: &str);

    /// Short user-visible message
    fn notice(&mut self, message: &str);

    /// Stored plugin data, `None` when nothing was saved yet
    fn load_data(&self) -> Result<Option<serde_json::Value>>;

    fn save_data(&mut self, data: &serde_json::Value) -> Result<()>;
}
