//! Per-command dispatch handlers.

use std::sync::Arc;

use crate::command::CommandDefinition;
use crate::host::{CommandDispatcher, Invoker};
use crate::markup::translate_color_codes;
use crate::placeholder::PlaceholderEngine;

/// Terminal state of one invocation. The host treats both as handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The permission gate failed; the denial message was sent.
    Denied,
    /// All configured messages and actions were emitted.
    Completed,
}

/// Runtime handler bound to one command definition at registration time.
/// Stateless between invocations; everything an invocation needs arrives
/// through its arguments.
#[derive(Debug, Clone)]
pub struct DispatchHandler {
    definition: Arc<CommandDefinition>,
    engine: PlaceholderEngine,
}

impl DispatchHandler {
    pub fn new(definition: Arc<CommandDefinition>, engine: PlaceholderEngine) -> Self {
        Self { definition, engine }
    }

    /// The definition this handler was bound to.
    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Run one invocation: permission gate, then expand and emit in strict
    /// configured order (all messages, then actor actions, then system
    /// actions). Nothing in here propagates an error to the host.
    pub fn handle(
        &self,
        invoker: &mut dyn Invoker,
        dispatcher: &mut dyn CommandDispatcher,
    ) -> Outcome {
        let def = &self.definition;

        if def.use_permission() && !invoker.has_permission(def.permission()) {
            invoker.send_message(&translate_color_codes(def.permission_message()));
            return Outcome::Denied;
        }

        match invoker.actor_context() {
            Some(ctx) => {
                for template in def.messages() {
                    let expanded = self.engine.expand(template, &ctx);
                    invoker.send_message(&translate_color_codes(&expanded));
                }
                for template in def.player_commands() {
                    let command = self.engine.expand(template, &ctx);
                    dispatcher.dispatch_as_actor(invoker, &command);
                }
                for template in def.console_commands() {
                    let command = self.engine.expand(template, &ctx);
                    dispatcher.dispatch_as_system(&command);
                }
            }
            None => {
                // No actor context exists, so no placeholder expansion.
                for template in def.console_messages() {
                    invoker.send_message(&translate_color_codes(template));
                }
            }
        }

        Outcome::Completed
    }
}
