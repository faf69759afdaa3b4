use cmdwrap_host::HostError;
use thiserror::Error;

/// A command or parameter definition that cannot be registered as written.
///
/// Fix the definition; retrying will not help.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
	/// A mandatory parameter follows an optional one.
	#[error("mandatory parameters must appear before optional parameters (command `{command}`, parameter `{parameter}`)")]
	ParameterOrder {
		command: String,
		/// First mandatory parameter found after an optional one.
		parameter: String,
	},
	/// An enum parameter has an empty value set.
	#[error("enum parameter `{parameter}` of command `{command}` needs at least one value")]
	MissingEnumValues { command: String, parameter: String },
}

/// Errors raised by a [`crate::CommandRegister`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
	#[error(transparent)]
	Definition(#[from] DefinitionError),
	/// The host rejected an enum or command registration.
	#[error("host rejected `{name}`: {source}")]
	Host {
		/// Namespaced name of the enum or command.
		name: String,
		#[source]
		source: HostError,
	},
	/// A command was queued after the register started flushing.
	#[error("register `{namespace}` is closed; command `{command}` was not queued")]
	Closed { namespace: String, command: String },
	/// Flush was requested a second time.
	#[error("register `{0}` was already flushed")]
	AlreadyFlushed(String),
}

/// Invalid register configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("invalid namespace `{0}`: must be non-empty and contain no `:` or whitespace")]
	InvalidNamespace(String),
	#[error("failed to parse register config: {0}")]
	Parse(String),
}
