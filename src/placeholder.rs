//! Placeholder expansion for message and action templates.

use std::sync::Arc;
use tracing::warn;

use crate::error::Result;

/// Fixed server hostname substituted for `%server%`.
pub const SERVER_HOST: &str = "mc.arkflame.com";

/// Fixed website substituted for `%website%`.
pub const WEBSITE: &str = "www.arkflame.com";

/// Placeholder source for one invocation: the identity and location of the
/// interactive actor that triggered the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    /// The actor's plain handle.
    pub name: String,
    /// The actor's formatted display name.
    pub display_name: String,
    /// Identifier of the world/region the actor is currently in.
    pub world: String,
}

impl ActorContext {
    pub fn new(name: &str, display_name: &str, world: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            world: world.to_string(),
        }
    }
}

/// Optional external placeholder-expansion integration, resolved once at
/// startup. Called after the built-in substitutions with the
/// already-partially-expanded text.
pub trait PlaceholderExpansion: Send + Sync {
    /// Integration name, for operational logs.
    fn name(&self) -> &str;

    /// Expand integration-provided placeholders in `text` for this actor.
    fn expand(&self, ctx: &ActorContext, text: &str) -> Result<String>;
}

/// Template expander: built-in literal substitutions plus the optional
/// external integration. Cheap to clone; handlers each hold one.
#[derive(Clone, Default)]
pub struct PlaceholderEngine {
    integration: Option<Arc<dyn PlaceholderExpansion>>,
}

impl PlaceholderEngine {
    /// Engine with only the built-in substitutions.
    pub fn new() -> Self {
        Self { integration: None }
    }

    /// Engine delegating to an external integration after the built-ins.
    pub fn with_integration(integration: Arc<dyn PlaceholderExpansion>) -> Self {
        Self {
            integration: Some(integration),
        }
    }

    /// Whether an external integration is active.
    pub fn has_integration(&self) -> bool {
        self.integration.is_some()
    }

    /// Expand placeholders in `template` against the actor context. Built-in
    /// tokens are replaced literally, in fixed order; the integration (when
    /// present) then runs on the result. An integration failure is logged
    /// and the last successful string is kept, so expansion never fails.
    pub fn expand(&self, template: &str, ctx: &ActorContext) -> String {
        let expanded = template
            .replace("%player%", &ctx.name)
            .replace("%displayname%", &ctx.display_name)
            .replace("%world%", &ctx.world)
            .replace("%server%", SERVER_HOST)
            .replace("%website%", WEBSITE);

        let Some(integration) = &self.integration else {
            return expanded;
        };

        match integration.expand(ctx, &expanded) {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    "Error processing {} placeholders: {}",
                    integration.name(),
                    e
                );
                expanded
            }
        }
    }
}

impl std::fmt::Debug for PlaceholderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderEngine")
            .field(
                "integration",
                &self.integration.as_ref().map(|i| i.name().to_string()),
            )
            .finish()
    }
}
