//! Command registry - the name to definition mapping.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::command::CommandDefinition;
use crate::config::CommandsConfig;

/// Mapping from trigger name to loaded definition. Rebuilt wholesale from
/// the config on every (re)load; never merged or patched in place. Readers
/// hold `Arc<CommandDefinition>` so an in-flight invocation keeps a
/// consistent definition across a reload.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<CommandDefinition>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Build a fresh registry from a loaded config. Total over the config:
    /// malformed fields were already defaulted at parse time, so no entry
    /// can fail here.
    pub fn load(config: &CommandsConfig) -> Self {
        let mut commands = HashMap::new();

        for (name, entry) in &config.commands {
            let definition = CommandDefinition::from_entry(name, entry.clone());
            commands.insert(name.clone(), Arc::new(definition));
        }

        info!("Loaded {} custom commands", commands.len());
        Self { commands }
    }

    /// Look up a definition by trigger name.
    pub fn get(&self, name: &str) -> Option<&Arc<CommandDefinition>> {
        self.commands.get(name)
    }

    /// Number of loaded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All trigger names, sorted for deterministic iteration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over all loaded definitions.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<CommandDefinition>)> {
        self.commands.iter()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
