//! Deferred command registration.
//!
//! A [`CommandRegister`] queues [`CommandDef`]s during initialization and submits them
//! to the host in one pass when startup fires. Each queued command becomes:
//! - one `register_enum` call per enum parameter, named `namespace:parameter`
//! - one `register_command` call named `namespace:command`, with the parameters split
//!   into mandatory and optional lists and the callback wrapped by [`wrap_callback`]

use std::collections::HashMap;
use std::sync::Arc;

use cmdwrap_host::{CommandRegistry, NativeCommand, PermissionLevel, StartupSignal};
use parking_lot::Mutex;

use crate::callback::wrap_callback;
use crate::command::CommandDef;
use crate::config::{FlushPolicy, RegisterConfig};
use crate::error::{ConfigError, DefinitionError, RegisterError};
use crate::namespaced;

/// Lifecycle of a register. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterPhase {
	/// Accepting commands.
	Created,
	/// Submitting the queue to the host.
	Flushing,
	/// Done; the queue is drained.
	Flushed,
}

/// What happened to each queued command during a flush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushReport {
	/// Namespaced names accepted by the host, in queue order.
	pub registered: Vec<String>,
	/// Commands whose registration was attempted and failed.
	pub failed: Vec<(String, RegisterError)>,
	/// Commands never attempted because an earlier failure aborted the flush.
	pub skipped: Vec<String>,
}

impl FlushReport {
	/// Returns true if every queued command registered.
	pub fn is_complete(&self) -> bool {
		self.failed.is_empty() && self.skipped.is_empty()
	}

	/// The first failure, if any.
	pub fn first_error(&self) -> Option<&RegisterError> {
		self.failed.first().map(|(_, e)| e)
	}
}

struct RegisterState {
	config: RegisterConfig,
	queue: Vec<CommandDef>,
	phase: RegisterPhase,
	report: Option<FlushReport>,
	attached: bool,
}

/// Accumulates command definitions and registers them with the host exactly once.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone)]
pub struct CommandRegister {
	state: Arc<Mutex<RegisterState>>,
}

impl CommandRegister {
	/// Creates an empty register.
	pub fn new(config: RegisterConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		tracing::debug!(namespace = %config.namespace, permission = %config.default_permission_level, cheats = config.cheats_required, "command register created");
		Ok(Self {
			state: Arc::new(Mutex::new(RegisterState {
				config,
				queue: Vec::new(),
				phase: RegisterPhase::Created,
				report: None,
				attached: false,
			})),
		})
	}

	/// Creates a register with optional overrides of the default permission level
	/// and cheats flag.
	pub fn with_defaults(
		namespace: impl Into<String>,
		default_permission_level: Option<PermissionLevel>,
		cheats_required: Option<bool>,
	) -> Result<Self, ConfigError> {
		let mut config = RegisterConfig::new(namespace);
		if let Some(level) = default_permission_level {
			config = config.default_permission_level(level);
		}
		if let Some(cheats) = cheats_required {
			config = config.cheats_required(cheats);
		}
		Self::new(config)
	}

	/// Creates a register and subscribes its flush to the host startup signal.
	pub fn on_startup(config: RegisterConfig, signal: &mut dyn StartupSignal) -> Result<Self, ConfigError> {
		let register = Self::new(config)?;
		register.attach(signal);
		Ok(register)
	}

	/// Subscribes this register's flush to `signal`.
	///
	/// A register subscribes at most once; later calls do nothing and return `false`.
	/// Failures are logged; inspect [`Self::last_report`] after startup for details.
	pub fn attach(&self, signal: &mut dyn StartupSignal) -> bool {
		{
			let mut state = self.state.lock();
			if state.attached {
				tracing::warn!(namespace = %state.config.namespace, "register already subscribed to startup; ignored");
				return false;
			}
			state.attached = true;
		}
		let register = self.clone();
		signal.subscribe(Box::new(move |registry: &mut dyn CommandRegistry| {
			let namespace = register.namespace();
			match register.flush(registry) {
				Ok(report) if report.is_complete() => {
					tracing::info!(namespace = %namespace, count = report.registered.len(), "custom commands registered");
				}
				Ok(report) => {
					tracing::error!(
						namespace = %namespace,
						registered = report.registered.len(),
						failed = report.failed.len(),
						"some custom commands failed to register"
					);
				}
				Err(e) => {
					tracing::error!(namespace = %namespace, error = %e, "custom command registration aborted");
				}
			}
		}));
		true
	}

	/// Queues a command for registration at startup.
	///
	/// Fails with [`RegisterError::Closed`] once flushing has begun.
	pub fn register_command(&self, command: CommandDef) -> Result<(), RegisterError> {
		let mut state = self.state.lock();
		if state.phase != RegisterPhase::Created {
			tracing::warn!(namespace = %state.config.namespace, command = %command.name, "command queued after flush; ignored");
			return Err(RegisterError::Closed {
				namespace: state.config.namespace.clone(),
				command: command.name,
			});
		}
		tracing::trace!(namespace = %state.config.namespace, command = %command.name, "command queued");
		state.queue.push(command);
		Ok(())
	}

	/// Submits every queued command to `registry`, in queue order.
	///
	/// With [`FlushPolicy::Abort`] the first failure stops the pass and is returned;
	/// commands after it are never attempted. With [`FlushPolicy::Continue`] each
	/// failure is recorded in the report and the pass goes on.
	pub fn flush(&self, registry: &mut dyn CommandRegistry) -> Result<FlushReport, RegisterError> {
		let (config, queue) = {
			let mut state = self.state.lock();
			if state.phase != RegisterPhase::Created {
				return Err(RegisterError::AlreadyFlushed(state.config.namespace.clone()));
			}
			state.phase = RegisterPhase::Flushing;
			(state.config.clone(), std::mem::take(&mut state.queue))
		};

		let _span = tracing::debug_span!("flush", namespace = %config.namespace, queued = queue.len()).entered();

		let mut report = FlushReport::default();
		let mut enums: HashMap<String, Vec<String>> = HashMap::new();
		let mut queue = queue.into_iter();
		let mut aborted = None;

		while let Some(command) = queue.next() {
			let name = namespaced(&config.namespace, &command.name);
			match submit(&config, command, registry, &mut enums) {
				Ok(()) => {
					tracing::debug!(command = %name, "command registered");
					report.registered.push(name);
				}
				Err(e) => {
					tracing::warn!(command = %name, error = %e, "command registration failed");
					report.failed.push((name, e.clone()));
					if config.flush_policy == FlushPolicy::Abort {
						report.skipped = queue.by_ref().map(|c| namespaced(&config.namespace, &c.name)).collect();
						aborted = Some(e);
						break;
					}
				}
			}
		}

		{
			let mut state = self.state.lock();
			state.phase = RegisterPhase::Flushed;
			state.report = Some(report.clone());
		}

		match aborted {
			Some(e) => {
				if !report.skipped.is_empty() {
					tracing::error!(skipped = ?report.skipped, "flush aborted; remaining commands were not registered");
				}
				Err(e)
			}
			None => Ok(report),
		}
	}

	pub fn namespace(&self) -> String {
		self.state.lock().config.namespace.clone()
	}

	pub fn config(&self) -> RegisterConfig {
		self.state.lock().config.clone()
	}

	/// Returns whether a startup hook has been subscribed.
	pub fn is_attached(&self) -> bool {
		self.state.lock().attached
	}

	pub fn phase(&self) -> RegisterPhase {
		self.state.lock().phase
	}

	/// Number of queued commands. Zero after flush.
	pub fn len(&self) -> usize {
		self.state.lock().queue.len()
	}

	pub fn is_empty(&self) -> bool {
		self.state.lock().queue.is_empty()
	}

	/// Unqualified names of queued commands, in queue order.
	pub fn queued_names(&self) -> Vec<String> {
		self.state.lock().queue.iter().map(|c| c.name.clone()).collect()
	}

	/// Report of the completed flush, including one that aborted.
	pub fn last_report(&self) -> Option<FlushReport> {
		self.state.lock().report.clone()
	}
}

impl std::fmt::Debug for CommandRegister {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.lock();
		f.debug_struct("CommandRegister")
			.field("config", &state.config)
			.field("queued", &state.queue.len())
			.field("phase", &state.phase)
			.finish()
	}
}

/// Registers one command and its enums with the host.
///
/// Enum values are checked before any host call for this command. An enum already
/// registered earlier in the same flush with identical values is not sent again.
fn submit(
	config: &RegisterConfig,
	command: CommandDef,
	registry: &mut dyn CommandRegistry,
	enums: &mut HashMap<String, Vec<String>>,
) -> Result<(), RegisterError> {
	let mut pending_enums = Vec::new();
	for parameter in command.enum_parameters() {
		let values = parameter.enum_values().unwrap_or_default();
		if values.is_empty() {
			return Err(DefinitionError::MissingEnumValues {
				command: command.name.clone(),
				parameter: parameter.name.clone(),
			}
			.into());
		}
		pending_enums.push((namespaced(&config.namespace, &parameter.name), values.to_vec()));
	}

	for (enum_name, values) in pending_enums {
		if enums.get(&enum_name) == Some(&values) {
			tracing::trace!(name = %enum_name, "enum already registered in this flush");
			continue;
		}
		registry
			.register_enum(&enum_name, &values)
			.map_err(|source| RegisterError::Host {
				name: enum_name.clone(),
				source,
			})?;
		enums.insert(enum_name, values);
	}

	let name = namespaced(&config.namespace, &command.name);
	let native = NativeCommand {
		name: name.clone(),
		description: command.description.clone(),
		permission_level: command.permission_level.unwrap_or(config.default_permission_level),
		cheats_required: command.cheats_required.unwrap_or(config.cheats_required),
		mandatory_parameters: command.mandatory_parameters().map(|p| p.to_native()).collect(),
		optional_parameters: command.optional_parameters().map(|p| p.to_native()).collect(),
	};

	let CommandDef {
		callback,
		success_message,
		failure_message,
		..
	} = command;
	let wrapped = wrap_callback(name.clone(), callback, success_message, failure_message);

	registry
		.register_command(native, wrapped)
		.map_err(|source| RegisterError::Host { name, source })
}

#[cfg(test)]
mod tests;
