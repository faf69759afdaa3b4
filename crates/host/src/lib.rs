//! Host engine command surface.
//!
//! This crate models the pieces of the host engine that custom commands touch:
//! - [`PermissionLevel`] and [`ParamType`]: fixed host enumerations, opaque tags to callers
//! - [`NativeCommand`] and [`CommandParameter`]: the shape the host registers
//! - [`ArgValue`] and [`CommandOrigin`]: what the host hands a command at invocation
//! - [`CommandRegistry`] and [`StartupSignal`]: the two host facilities used at startup
//!
//! Nothing here dispatches commands or enforces permissions; that stays with the host.

mod args;
mod native;
mod origin;
mod registry;

#[cfg(feature = "testing")]
pub mod testing;

pub use args::ArgValue;
pub use native::{CommandParameter, NativeCommand};
pub use origin::{CommandOrigin, EntityRef, PlayerRef, Vector3};
pub use registry::{CommandRegistry, HostError, StartupHook, StartupSignal, WrappedCallback};
use serde::{Deserialize, Serialize};

/// Permission tier required to run a command.
///
/// Variants are ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
	/// Anyone may run the command.
	Any,
	/// Operators and command blocks.
	#[default]
	GameDirectors,
	/// Server administrators.
	Admin,
	/// The host of a local world.
	Host,
	/// Dedicated server owner.
	Owner,
}

impl PermissionLevel {
	/// Returns the lowercase tag used in configuration.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Any => "any",
			Self::GameDirectors => "game_directors",
			Self::Admin => "admin",
			Self::Host => "host",
			Self::Owner => "owner",
		}
	}
}

impl std::fmt::Display for PermissionLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Data type of a command parameter, as understood by the host parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
	BlockType,
	Boolean,
	EntitySelector,
	EntityType,
	/// One of a registered set of string values.
	Enum,
	Float,
	Integer,
	ItemType,
	Location,
	PlayerSelector,
	String,
}

impl std::fmt::Display for ParamType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(self, f)
	}
}

/// Outcome status reported back to the host after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandStatus {
	Success,
	Failure,
}

/// Result of a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
	/// Message shown to the invoker, if any.
	pub message: Option<String>,
	/// Whether the command succeeded.
	pub status: CommandStatus,
}

impl CommandResult {
	/// Creates a successful result.
	pub fn success(message: Option<String>) -> Self {
		Self {
			message,
			status: CommandStatus::Success,
		}
	}

	/// Creates a failed result.
	pub fn failure(message: Option<String>) -> Self {
		Self {
			message,
			status: CommandStatus::Failure,
		}
	}

	/// Returns true if the status is [`CommandStatus::Success`].
	#[inline]
	pub fn is_success(&self) -> bool {
		self.status == CommandStatus::Success
	}
}
