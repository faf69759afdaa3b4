use crate::{ParamType, PermissionLevel};

/// Host-native parameter entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParameter {
	/// Name as it appears on the command line.
	pub name: String,
	/// Parsed type.
	pub param_type: ParamType,
}

/// Host-native command descriptor passed to [`crate::CommandRegistry::register_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCommand {
	/// Fully qualified `namespace:name`.
	pub name: String,
	pub description: String,
	pub permission_level: PermissionLevel,
	pub cheats_required: bool,
	/// Parameters that must be supplied, in declaration order.
	pub mandatory_parameters: Vec<CommandParameter>,
	/// Trailing parameters that may be omitted, in declaration order.
	pub optional_parameters: Vec<CommandParameter>,
}

impl NativeCommand {
	/// Total number of declared parameters.
	pub fn arity(&self) -> usize {
		self.mandatory_parameters.len() + self.optional_parameters.len()
	}

	/// Iterates all parameters, mandatory first.
	pub fn parameters(&self) -> impl Iterator<Item = &CommandParameter> {
		self.mandatory_parameters.iter().chain(&self.optional_parameters)
	}
}
