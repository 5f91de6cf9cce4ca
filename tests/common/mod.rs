//! Common test utilities for dispatcher integration tests.
//!
//! Provides an in-memory fake host with a declared-trigger set, a recording
//! invoker, and a recording sub-command dispatcher, so tests can observe
//! every emitted effect.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use customcmd::{
    ActorContext, CommandDispatcher, DispatchHandler, Error, Host, Invoker, Outcome,
    PlaceholderExpansion, Result,
};

// ========== Fake Host ==========

/// In-memory host: triggers must be declared ahead of binding, mirroring an
/// external manifest. Routing a trigger runs its bound handler with a fresh
/// recording dispatcher and returns everything that was emitted.
pub struct FakeHost {
    declared: HashSet<String>,
    bound: HashMap<String, DispatchHandler>,
    integration: Option<Arc<dyn PlaceholderExpansion>>,
}

impl FakeHost {
    /// Host with the given pre-declared trigger names.
    pub fn with_declared(names: &[&str]) -> Self {
        Self {
            declared: names.iter().map(|n| n.to_string()).collect(),
            bound: HashMap::new(),
            integration: None,
        }
    }

    /// Attach a placeholder integration to be discovered at startup.
    pub fn with_integration(mut self, integration: Arc<dyn PlaceholderExpansion>) -> Self {
        self.integration = Some(integration);
        self
    }

    /// Trigger names with a live handler bound.
    pub fn bound_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bound.keys().cloned().collect();
        names.sort();
        names
    }

    /// Route one invocation to the handler bound to `name`, collecting the
    /// sub-commands it dispatches. Panics when nothing is bound, which in a
    /// test means registration went wrong.
    pub fn route(&self, name: &str, invoker: &mut dyn Invoker) -> (Outcome, RecordingDispatcher) {
        let handler = self
            .bound
            .get(name)
            .unwrap_or_else(|| panic!("no handler bound for /{}", name));
        let mut dispatcher = RecordingDispatcher::default();
        let outcome = handler.handle(invoker, &mut dispatcher);
        (outcome, dispatcher)
    }
}

impl Host for FakeHost {
    fn bind(&mut self, name: &str, handler: DispatchHandler) -> Result<()> {
        if !self.declared.contains(name) {
            return Err(Error::UndeclaredTrigger(name.to_string()));
        }
        self.bound.insert(name.to_string(), handler);
        Ok(())
    }

    fn unbind(&mut self, name: &str) {
        self.bound.remove(name);
    }

    fn placeholder_integration(&self) -> Option<Arc<dyn PlaceholderExpansion>> {
        self.integration.clone()
    }
}

// ========== Recording Invokers ==========

/// Identity a sub-command was dispatched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchedAs {
    Actor,
    System,
}

/// Records every sub-command line routed back through the host.
#[derive(Default)]
pub struct RecordingDispatcher {
    pub dispatched: Vec<(DispatchedAs, String)>,
}

impl CommandDispatcher for RecordingDispatcher {
    fn dispatch_as_actor(&mut self, _invoker: &mut dyn Invoker, command_line: &str) {
        self.dispatched
            .push((DispatchedAs::Actor, command_line.to_string()));
    }

    fn dispatch_as_system(&mut self, command_line: &str) {
        self.dispatched
            .push((DispatchedAs::System, command_line.to_string()));
    }
}

/// Recording invoker: interactive when built with an actor context,
/// non-interactive (console) otherwise.
pub struct RecordingInvoker {
    ctx: Option<ActorContext>,
    permissions: HashSet<String>,
    pub received: Vec<String>,
}

impl RecordingInvoker {
    pub fn actor(name: &str, world: &str) -> Self {
        Self {
            ctx: Some(ActorContext::new(name, name, world)),
            permissions: HashSet::new(),
            received: Vec::new(),
        }
    }

    pub fn console() -> Self {
        Self {
            ctx: None,
            permissions: HashSet::new(),
            received: Vec::new(),
        }
    }

    pub fn grant(mut self, permission: &str) -> Self {
        self.permissions.insert(permission.to_string());
        self
    }
}

impl Invoker for RecordingInvoker {
    fn actor_context(&self) -> Option<ActorContext> {
        self.ctx.clone()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    fn send_message(&mut self, message: &str) {
        self.received.push(message.to_string());
    }
}

// ========== Config Helpers ==========

/// Write `contents` as a config file in a fresh temp dir, returning the dir
/// guard (keep it alive) and the file path.
pub fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
