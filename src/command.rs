//! Immutable command definitions.

use crate::config::CommandEntry;

/// One named command's loaded behavior: permission gate, response messages,
/// and follow-on actions. Never mutated after construction; a config reload
/// builds fresh definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    name: String,
    permission: String,
    permission_message: String,
    messages: Vec<String>,
    console_messages: Vec<String>,
    player_commands: Vec<String>,
    console_commands: Vec<String>,
    use_permission: bool,
}

impl CommandDefinition {
    /// Build a definition from a raw config entry. When the entry has no
    /// console messages, an independent copy of the actor messages is taken
    /// here, once, so the two lists never alias.
    pub fn from_entry(name: &str, entry: CommandEntry) -> Self {
        let CommandEntry {
            permission,
            permission_message,
            use_permission,
            messages,
            console_messages,
            player_commands,
            console_commands,
        } = entry;

        let console_messages = if console_messages.is_empty() {
            messages.clone()
        } else {
            console_messages
        };

        Self {
            name: name.to_string(),
            permission,
            permission_message,
            messages,
            console_messages,
            player_commands,
            console_commands,
            use_permission,
        }
    }

    /// The trigger name, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission node checked when the gate is enforced.
    pub fn permission(&self) -> &str {
        &self.permission
    }

    /// Template shown on a failed permission check.
    pub fn permission_message(&self) -> &str {
        &self.permission_message
    }

    /// Templates sent to an interactive actor.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Templates sent to a non-interactive invoker.
    pub fn console_messages(&self) -> &[String] {
        &self.console_messages
    }

    /// Sub-commands dispatched as the invoking actor.
    pub fn player_commands(&self) -> &[String] {
        &self.player_commands
    }

    /// Sub-commands dispatched with system identity.
    pub fn console_commands(&self) -> &[String] {
        &self.console_commands
    }

    /// Whether the permission gate is enforced.
    pub fn use_permission(&self) -> bool {
        self.use_permission
    }
}
