//! Command definitions and definition-time validation.

use std::fmt;

use cmdwrap_host::{CommandOrigin, PermissionLevel};

use crate::callback::{CommandArgs, CommandCallback, IntoOutcome, erase_callback};
use crate::error::DefinitionError;
use crate::parameter::ParameterDef;

/// Describes one registerable command.
///
/// Permission level and cheats flag fall back to the register defaults when unset.
pub struct CommandDef {
	/// Unqualified name; the register adds its namespace.
	pub name: String,
	/// Description as seen on the command line.
	pub description: String,
	/// Shown to the invoker after a successful run.
	pub success_message: Option<String>,
	/// Shown to the invoker after a failed run.
	pub failure_message: Option<String>,
	pub permission_level: Option<PermissionLevel>,
	pub cheats_required: Option<bool>,
	/// Declared parameters; mandatory ones first.
	pub parameters: Vec<ParameterDef>,
	pub(crate) callback: CommandCallback,
}

impl CommandDef {
	/// Creates a command with no parameters and no messages.
	///
	/// The callback may return `()`, `bool`, `Result<(), E>` or `Result<bool, E>`;
	/// `false` and `Err` count as failure.
	pub fn new<F, R>(name: impl Into<String>, description: impl Into<String>, callback: F) -> Self
	where
		F: Fn(&CommandOrigin, &CommandArgs<'_>) -> R + Send + Sync + 'static,
		R: IntoOutcome,
	{
		Self {
			name: name.into(),
			description: description.into(),
			success_message: None,
			failure_message: None,
			permission_level: None,
			cheats_required: None,
			parameters: Vec::new(),
			callback: erase_callback(callback),
		}
	}

	pub fn success_message(mut self, message: impl Into<String>) -> Self {
		self.success_message = Some(message.into());
		self
	}

	pub fn failure_message(mut self, message: impl Into<String>) -> Self {
		self.failure_message = Some(message.into());
		self
	}

	pub fn permission_level(mut self, level: PermissionLevel) -> Self {
		self.permission_level = Some(level);
		self
	}

	pub fn cheats_required(mut self, required: bool) -> Self {
		self.cheats_required = Some(required);
		self
	}

	/// Appends one parameter.
	pub fn parameter(mut self, parameter: ParameterDef) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Appends parameters in order.
	pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterDef>) -> Self {
		self.parameters.extend(parameters);
		self
	}

	/// Mandatory parameters, in declaration order.
	pub fn mandatory_parameters(&self) -> impl Iterator<Item = &ParameterDef> {
		self.parameters.iter().filter(|p| p.mandatory)
	}

	/// Optional parameters, in declaration order.
	pub fn optional_parameters(&self) -> impl Iterator<Item = &ParameterDef> {
		self.parameters.iter().filter(|p| !p.mandatory)
	}

	/// Enum parameters, in declaration order.
	pub fn enum_parameters(&self) -> impl Iterator<Item = &ParameterDef> {
		self.parameters.iter().filter(|p| p.is_enum())
	}
}

impl fmt::Debug for CommandDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandDef")
			.field("name", &self.name)
			.field("description", &self.description)
			.field("success_message", &self.success_message)
			.field("failure_message", &self.failure_message)
			.field("permission_level", &self.permission_level)
			.field("cheats_required", &self.cheats_required)
			.field("parameters", &self.parameters)
			.finish_non_exhaustive()
	}
}

/// Checks that no mandatory parameter follows an optional one.
///
/// Returns the first offending mandatory parameter.
pub fn validate_parameter_order(parameters: &[ParameterDef]) -> Result<(), &ParameterDef> {
	let Some(first_optional) = parameters.iter().position(|p| !p.mandatory) else {
		return Ok(());
	};
	match parameters[first_optional..].iter().find(|p| p.mandatory) {
		Some(offender) => Err(offender),
		None => Ok(()),
	}
}

/// Defines a custom command.
///
/// Fails with [`DefinitionError::ParameterOrder`] if a mandatory parameter appears
/// after an optional one; otherwise returns the definition unchanged.
///
/// # Example
///
/// ```
/// use cmdwrap_registry::{CommandDef, GenericType, ParameterDef, define_command};
///
/// let chance = define_command(
/// 	CommandDef::new("chance", "Runs a command with a percentage chance", |_, args| {
/// 		let percent: i32 = args.get(0)?;
/// 		Ok::<_, cmdwrap_registry::ArgError>(percent > 0)
/// 	})
/// 	.parameter(ParameterDef::mandatory("percentageChance", GenericType::Integer))
/// 	.parameter(ParameterDef::mandatory("command", GenericType::String)),
/// )
/// .unwrap();
/// assert_eq!(chance.parameters.len(), 2);
/// ```
pub fn define_command(command: CommandDef) -> Result<CommandDef, DefinitionError> {
	if let Err(offender) = validate_parameter_order(&command.parameters) {
		return Err(DefinitionError::ParameterOrder {
			command: command.name.clone(),
			parameter: offender.name.clone(),
		});
	}
	tracing::trace!(command = %command.name, parameters = command.parameters.len(), "command defined");
	Ok(command)
}
