//! Custom Command Dispatcher Library
//!
//! This crate loads a declarative configuration of named commands (trigger,
//! permission gate, messages, follow-on actions), binds each one as a live
//! handler on a host platform, and expands dynamic placeholders into the
//! configured text and actions at invocation time.

pub mod command;
pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod lifecycle;
pub mod markup;
pub mod placeholder;
pub mod registry;

pub use command::CommandDefinition;
pub use config::{CommandEntry, CommandsConfig, DEFAULT_PERMISSION_MESSAGE};
pub use error::{Error, Result};
pub use handler::{DispatchHandler, Outcome};
pub use host::{CommandDispatcher, Host, Invoker};
pub use lifecycle::PluginLifecycle;
pub use markup::translate_color_codes;
pub use placeholder::{
    ActorContext, PlaceholderEngine, PlaceholderExpansion, SERVER_HOST, WEBSITE,
};
pub use registry::CommandRegistry;
