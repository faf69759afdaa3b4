use thiserror::Error;

use crate::{ArgValue, CommandOrigin, CommandResult, NativeCommand};

/// Callback the host runs for each invocation of a registered command.
pub type WrappedCallback = Box<dyn Fn(&CommandOrigin, &[ArgValue]) -> CommandResult + Send + Sync>;

/// One-shot hook run when the host opens its startup registration window.
pub type StartupHook = Box<dyn FnOnce(&mut dyn CommandRegistry)>;

/// Errors raised by the host registration facilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
	/// Registration attempted outside the startup window.
	#[error("registration is only allowed during startup")]
	StartupClosed,
	/// A command with this name is already registered.
	#[error("command already registered: {0}")]
	DuplicateCommand(String),
	/// An enum with this name is already registered.
	#[error("enum already registered: {0}")]
	DuplicateEnum(String),
	/// An enum was registered with no values.
	#[error("enum has no values: {0}")]
	EmptyEnum(String),
}

/// Host command registry available during startup.
pub trait CommandRegistry {
	/// Registers a named set of enum values.
	fn register_enum(&mut self, name: &str, values: &[String]) -> Result<(), HostError>;

	/// Registers a command and the callback that runs it.
	fn register_command(&mut self, command: NativeCommand, callback: WrappedCallback) -> Result<(), HostError>;
}

/// Host lifecycle signal fired once when custom commands may be registered.
pub trait StartupSignal {
	/// Subscribes a hook to run when startup fires.
	fn subscribe(&mut self, hook: StartupHook);
}
