//! External collaborator seams: the host's registration and routing surface.
//!
//! The host owns command declaration, permission storage, and console I/O.
//! This core only needs three capabilities from it: bind a handler to a
//! pre-declared trigger, route follow-on sub-commands, and answer the
//! permission predicate for an invoker.

use std::sync::Arc;

use crate::error::Result;
use crate::handler::DispatchHandler;
use crate::placeholder::{ActorContext, PlaceholderExpansion};

/// The host's command-registration surface.
pub trait Host {
    /// Bind a handler to the trigger `name`. Fails with
    /// [`Error::UndeclaredTrigger`](crate::Error::UndeclaredTrigger) when the
    /// surrounding manifest never declared that trigger to the host.
    /// Re-binding an already-bound name replaces the previous handler.
    fn bind(&mut self, name: &str, handler: DispatchHandler) -> Result<()>;

    /// Remove the handler bound to `name`, if any.
    fn unbind(&mut self, name: &str);

    /// The optional external placeholder-expansion integration, detected by
    /// name on the host. Probed once at startup.
    fn placeholder_integration(&self) -> Option<Arc<dyn PlaceholderExpansion>> {
        None
    }
}

/// Routes sub-command lines back through the host. Re-entrant by design: a
/// dispatched line may itself be a bound trigger, and no cycle guard exists.
pub trait CommandDispatcher {
    /// Dispatch a command line as the invoking actor.
    fn dispatch_as_actor(&mut self, invoker: &mut dyn Invoker, command_line: &str);

    /// Dispatch a command line with elevated system identity.
    fn dispatch_as_system(&mut self, command_line: &str);
}

/// Whoever triggered a command.
pub trait Invoker {
    /// Placeholder source for an interactive actor. `None` marks a
    /// non-interactive invoker such as a console.
    fn actor_context(&self) -> Option<ActorContext>;

    /// The host's permission predicate. Non-interactive invokers are not
    /// special-cased here; whatever the host answers, goes.
    fn has_permission(&self, permission: &str) -> bool;

    /// Deliver one already-formatted line to the invoker.
    fn send_message(&mut self, message: &str);
}
