//! Plugin lifecycle orchestration: startup, reload, shutdown.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::CommandsConfig;
use crate::error::Result;
use crate::handler::DispatchHandler;
use crate::host::Host;
use crate::placeholder::PlaceholderEngine;
use crate::registry::CommandRegistry;

/// Owns the load order: ensure config, probe the optional placeholder
/// integration, build the registry, bind one handler per trigger. Holds no
/// other resources, so shutdown is just a banner.
#[derive(Debug)]
pub struct PluginLifecycle {
    config_path: PathBuf,
    engine: PlaceholderEngine,
    registry: CommandRegistry,
}

impl PluginLifecycle {
    /// Start up against a host: create the config with defaults when absent,
    /// resolve the placeholder integration once for the process lifetime,
    /// load the registry, and bind every command. A per-command bind failure
    /// is a warning, never fatal.
    pub fn enable<P: AsRef<Path>>(config_path: P, host: &mut dyn Host) -> Result<Self> {
        let config_path = config_path.as_ref().to_path_buf();
        let config = CommandsConfig::load_or_init(&config_path)?;

        let engine = match host.placeholder_integration() {
            Some(integration) => {
                info!(
                    "{} found! Placeholder support enabled",
                    integration.name()
                );
                PlaceholderEngine::with_integration(integration)
            }
            None => {
                info!("No placeholder integration found. External placeholders will not work");
                PlaceholderEngine::new()
            }
        };

        let registry = CommandRegistry::load(&config);

        let lifecycle = Self {
            config_path,
            engine,
            registry,
        };
        lifecycle.bind_all(host);

        info!("Custom commands enabled");
        Ok(lifecycle)
    }

    /// Re-read the config and replace the registry wholesale. Triggers from
    /// the previous load that the new config no longer names are unbound
    /// first; everything else is re-bound, replacing the old handlers.
    pub fn reload(&mut self, host: &mut dyn Host) -> Result<()> {
        let config = CommandsConfig::load_or_init(&self.config_path)?;
        let next = CommandRegistry::load(&config);

        for name in self.registry.names() {
            if next.get(&name).is_none() {
                host.unbind(&name);
            }
        }

        self.registry = next;
        self.bind_all(host);
        Ok(())
    }

    /// Shutdown banner. No connections or background work to tear down.
    pub fn disable(&self) {
        info!("Custom commands disabled");
    }

    /// The currently loaded registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The placeholder engine resolved at startup.
    pub fn engine(&self) -> &PlaceholderEngine {
        &self.engine
    }

    fn bind_all(&self, host: &mut dyn Host) {
        for name in self.registry.names() {
            let Some(definition) = self.registry.get(&name) else {
                continue;
            };
            let handler = DispatchHandler::new(definition.clone(), self.engine.clone());
            if let Err(e) = host.bind(&name, handler) {
                warn!(
                    "Failed to register command /{}: {}. Make sure the trigger is declared in the host manifest",
                    name, e
                );
            }
        }
    }
}
