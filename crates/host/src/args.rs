use crate::{EntityRef, ParamType, PlayerRef, Vector3};

/// A single positional argument as parsed by the host.
///
/// Each variant corresponds to one [`ParamType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
	/// Block type identifier.
	Block(String),
	Bool(bool),
	/// Entities matched by a selector.
	Entities(Vec<EntityRef>),
	/// Entity type identifier.
	EntityType(String),
	/// The selected enum value.
	Enum(String),
	Float(f32),
	Integer(i32),
	/// Item type identifier.
	Item(String),
	Location(Vector3),
	/// Players matched by a selector.
	Players(Vec<PlayerRef>),
	String(String),
}

impl ArgValue {
	/// Returns the parameter type this value was parsed as.
	pub fn param_type(&self) -> ParamType {
		match self {
			Self::Block(_) => ParamType::BlockType,
			Self::Bool(_) => ParamType::Boolean,
			Self::Entities(_) => ParamType::EntitySelector,
			Self::EntityType(_) => ParamType::EntityType,
			Self::Enum(_) => ParamType::Enum,
			Self::Float(_) => ParamType::Float,
			Self::Integer(_) => ParamType::Integer,
			Self::Item(_) => ParamType::ItemType,
			Self::Location(_) => ParamType::Location,
			Self::Players(_) => ParamType::PlayerSelector,
			Self::String(_) => ParamType::String,
		}
	}
}
