//! Parameter definitions.

use cmdwrap_host::{CommandParameter, ParamType};

/// Parameter types that carry no value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericType {
	BlockType,
	Boolean,
	EntitySelector,
	EntityType,
	Float,
	Integer,
	ItemType,
	Location,
	PlayerSelector,
	String,
}

impl From<GenericType> for ParamType {
	fn from(ty: GenericType) -> Self {
		match ty {
			GenericType::BlockType => ParamType::BlockType,
			GenericType::Boolean => ParamType::Boolean,
			GenericType::EntitySelector => ParamType::EntitySelector,
			GenericType::EntityType => ParamType::EntityType,
			GenericType::Float => ParamType::Float,
			GenericType::Integer => ParamType::Integer,
			GenericType::ItemType => ParamType::ItemType,
			GenericType::Location => ParamType::Location,
			GenericType::PlayerSelector => ParamType::PlayerSelector,
			GenericType::String => ParamType::String,
		}
	}
}

/// Type of a parameter: a plain host type, or an enum with its allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterKind {
	Generic(GenericType),
	/// Values are registered with the host under `namespace:parameter_name`.
	Enum { values: Vec<String> },
}

/// Describes one command argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterDef {
	/// Name as it appears on the command line. Unique within a command.
	pub name: String,
	/// Mandatory parameters must precede optional ones.
	pub mandatory: bool,
	pub kind: ParameterKind,
}

impl ParameterDef {
	/// Creates a parameter of a plain host type.
	pub fn new(name: impl Into<String>, ty: GenericType, mandatory: bool) -> Self {
		Self {
			name: name.into(),
			mandatory,
			kind: ParameterKind::Generic(ty),
		}
	}

	/// Creates an enum parameter accepting one of `values`.
	pub fn enumeration<I, S>(name: impl Into<String>, values: I, mandatory: bool) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			mandatory,
			kind: ParameterKind::Enum {
				values: values.into_iter().map(Into::into).collect(),
			},
		}
	}

	/// Shorthand for a mandatory parameter of a plain type.
	pub fn mandatory(name: impl Into<String>, ty: GenericType) -> Self {
		Self::new(name, ty, true)
	}

	/// Shorthand for an optional parameter of a plain type.
	pub fn optional(name: impl Into<String>, ty: GenericType) -> Self {
		Self::new(name, ty, false)
	}

	/// Host parameter type.
	pub fn param_type(&self) -> ParamType {
		match &self.kind {
			ParameterKind::Generic(ty) => (*ty).into(),
			ParameterKind::Enum { .. } => ParamType::Enum,
		}
	}

	/// Enum values, or `None` for a generic parameter.
	pub fn enum_values(&self) -> Option<&[String]> {
		match &self.kind {
			ParameterKind::Enum { values } => Some(values),
			ParameterKind::Generic(_) => None,
		}
	}

	#[inline]
	pub fn is_enum(&self) -> bool {
		matches!(self.kind, ParameterKind::Enum { .. })
	}

	/// Host-native parameter entry.
	pub fn to_native(&self) -> CommandParameter {
		CommandParameter {
			name: self.name.clone(),
			param_type: self.param_type(),
		}
	}
}

/// Defines a command parameter.
///
/// Returns the definition unchanged. Enum values are checked for emptiness when the
/// owning command is flushed, not here.
///
/// # Example
///
/// ```
/// use cmdwrap_registry::{ParameterDef, define_parameter};
///
/// let mode = define_parameter(ParameterDef::enumeration("mode", ["default", "hollow", "walls"], true));
/// assert_eq!(mode.enum_values().map(<[String]>::len), Some(3));
/// ```
pub fn define_parameter(parameter: ParameterDef) -> ParameterDef {
	tracing::trace!(parameter = %parameter.name, ty = %parameter.param_type(), mandatory = parameter.mandatory, "parameter defined");
	parameter
}

#[cfg(test)]
mod tests;
