//! In-memory host used by tests and demos.
//!
//! [`RecordingHost`] stands in for the engine: it collects startup hooks, fires them
//! once against a [`RecordedRegistry`], and keeps every registration in call order so
//! tests can assert on exactly what reached the host.

use std::fmt;

use crate::{
	ArgValue, CommandOrigin, CommandRegistry, CommandResult, HostError, NativeCommand, StartupHook,
	StartupSignal, WrappedCallback,
};

/// A command accepted by the [`RecordedRegistry`].
pub struct RecordedCommand {
	/// The native descriptor as submitted.
	pub command: NativeCommand,
	callback: WrappedCallback,
}

impl RecordedCommand {
	/// Runs the registered callback the way the host dispatcher would.
	pub fn invoke(&self, origin: &CommandOrigin, args: &[ArgValue]) -> CommandResult {
		(self.callback)(origin, args)
	}
}

impl fmt::Debug for RecordedCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecordedCommand")
			.field("command", &self.command)
			.finish_non_exhaustive()
	}
}

/// Registry that records every call and enforces the host's registration rules.
#[derive(Debug, Default)]
pub struct RecordedRegistry {
	open: bool,
	enums: Vec<(String, Vec<String>)>,
	commands: Vec<RecordedCommand>,
}

impl RecordedRegistry {
	/// Creates a registry with its startup window already open.
	pub fn open() -> Self {
		Self {
			open: true,
			..Self::default()
		}
	}

	/// Closes the startup window; later registrations fail.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Returns whether registrations are currently accepted.
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Registered enums in call order.
	pub fn enums(&self) -> &[(String, Vec<String>)] {
		&self.enums
	}

	/// Registered commands in call order.
	pub fn commands(&self) -> &[RecordedCommand] {
		&self.commands
	}

	/// Names of registered commands in call order.
	pub fn command_names(&self) -> Vec<&str> {
		self.commands.iter().map(|c| c.command.name.as_str()).collect()
	}

	/// Finds a registered command by fully qualified name.
	pub fn find(&self, name: &str) -> Option<&RecordedCommand> {
		self.commands.iter().find(|c| c.command.name == name)
	}

	/// Looks up the values of a registered enum.
	pub fn enum_values(&self, name: &str) -> Option<&[String]> {
		self.enums
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, values)| values.as_slice())
	}
}

impl CommandRegistry for RecordedRegistry {
	fn register_enum(&mut self, name: &str, values: &[String]) -> Result<(), HostError> {
		if !self.open {
			return Err(HostError::StartupClosed);
		}
		if values.is_empty() {
			return Err(HostError::EmptyEnum(name.to_string()));
		}
		if self.enum_values(name).is_some() {
			return Err(HostError::DuplicateEnum(name.to_string()));
		}
		tracing::trace!(name, count = values.len(), "host: enum registered");
		self.enums.push((name.to_string(), values.to_vec()));
		Ok(())
	}

	fn register_command(&mut self, command: NativeCommand, callback: WrappedCallback) -> Result<(), HostError> {
		if !self.open {
			return Err(HostError::StartupClosed);
		}
		if self.find(&command.name).is_some() {
			return Err(HostError::DuplicateCommand(command.name));
		}
		tracing::trace!(name = %command.name, arity = command.arity(), "host: command registered");
		self.commands.push(RecordedCommand { command, callback });
		Ok(())
	}
}

/// Fake host engine exposing a one-shot startup signal.
#[derive(Default)]
pub struct RecordingHost {
	hooks: Vec<StartupHook>,
	registry: RecordedRegistry,
	fired: bool,
}

impl RecordingHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of hooks waiting for startup.
	pub fn pending_hooks(&self) -> usize {
		self.hooks.len()
	}

	/// Returns whether startup has fired.
	pub fn has_started(&self) -> bool {
		self.fired
	}

	/// Opens the registration window, runs every subscribed hook once in subscription
	/// order, then closes the window. Later calls do nothing.
	pub fn fire_startup(&mut self) {
		if self.fired {
			return;
		}
		self.fired = true;
		self.registry.open = true;
		for hook in std::mem::take(&mut self.hooks) {
			hook(&mut self.registry);
		}
		self.registry.close();
	}

	/// Recorded host registry.
	pub fn registry(&self) -> &RecordedRegistry {
		&self.registry
	}

	/// Mutable access to the registry, e.g. to attempt a late registration.
	pub fn registry_mut(&mut self) -> &mut RecordedRegistry {
		&mut self.registry
	}

	/// Dispatches a command by fully qualified name.
	///
	/// Returns `None` if no such command was registered.
	pub fn invoke(&self, name: &str, origin: &CommandOrigin, args: &[ArgValue]) -> Option<CommandResult> {
		let command = self.registry.find(name)?;
		tracing::trace!(name, origin = %origin.describe(), "host: dispatch");
		Some(command.invoke(origin, args))
	}
}

impl StartupSignal for RecordingHost {
	fn subscribe(&mut self, hook: StartupHook) {
		if self.fired {
			tracing::warn!("host: startup hook subscribed after startup fired; it will never run");
		}
		self.hooks.push(hook);
	}
}

impl fmt::Debug for RecordingHost {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecordingHost")
			.field("pending_hooks", &self.hooks.len())
			.field("registry", &self.registry)
			.field("fired", &self.fired)
			.finish()
	}
}
