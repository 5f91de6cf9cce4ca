//! Command configuration management.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

use crate::error::{Error, Result};

/// Stock message shown when a permission gate fails and the entry
/// configures no message of its own.
pub const DEFAULT_PERMISSION_MESSAGE: &str = "&cYou don't have permission to use this command.";

/// Root configuration document: the `commands` table, one entry per trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// Configured commands, keyed by trigger name.
    #[serde(default)]
    pub commands: BTreeMap<String, CommandEntry>,
}

/// One command's raw configuration. Every field is optional in the file;
/// missing fields default, they never fail the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommandEntry {
    /// Permission node required when `use-permission` is set.
    pub permission: String,

    /// Template shown to an invoker that fails the permission gate.
    pub permission_message: String,

    /// Whether the permission gate is enforced at all.
    pub use_permission: bool,

    /// Message templates sent to an interactive actor.
    pub messages: Vec<String>,

    /// Message templates sent to a non-interactive invoker. Falls back to
    /// `messages` at load time when left empty.
    pub console_messages: Vec<String>,

    /// Sub-command templates dispatched as the invoking actor.
    pub player_commands: Vec<String>,

    /// Sub-command templates dispatched with system identity.
    pub console_commands: Vec<String>,
}

impl Default for CommandEntry {
    fn default() -> Self {
        Self {
            permission: String::new(),
            permission_message: DEFAULT_PERMISSION_MESSAGE.to_string(),
            use_permission: false,
            messages: Vec::new(),
            console_messages: Vec::new(),
            player_commands: Vec::new(),
            console_commands: Vec::new(),
        }
    }
}

impl CommandsConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the config, creating it with the built-in default commands when
    /// the file is missing or its `commands` table is empty. The defaults
    /// are written back so subsequent loads are stable.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };

        if config.commands.is_empty() {
            warn!(
                "No commands section found in {}, creating default commands",
                path.display()
            );
            config.commands = Self::default_commands();
            config.save(path)?;
        }

        Ok(config)
    }

    /// The built-in default command set: three informational link commands,
    /// no permission gate, no follow-on actions.
    pub fn default_commands() -> BTreeMap<String, CommandEntry> {
        let mut commands = BTreeMap::new();
        commands.insert(
            "store".to_string(),
            link_entry(
                "&8&l»&r &6Visit our store at: &e&nhttps://www.arkflame.com/store",
                "customcommands.store",
            ),
        );
        commands.insert(
            "map".to_string(),
            link_entry(
                "&8&l»&r &6View our server map at: &e&nhttps://www.arkflame.com/map",
                "customcommands.map",
            ),
        );
        commands.insert(
            "discord".to_string(),
            link_entry(
                "&8&l»&r &6Join our Discord server at: &e&nhttps://discord.arkflame.com",
                "customcommands.discord",
            ),
        );
        commands
    }
}

fn link_entry(message: &str, permission: &str) -> CommandEntry {
    CommandEntry {
        permission: permission.to_string(),
        messages: vec![message.to_string()],
        ..CommandEntry::default()
    }
}
