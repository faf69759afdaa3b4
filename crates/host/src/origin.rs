/// World-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl Vector3 {
	pub const fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}
}

/// Handle to a host entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
	/// Host-assigned entity id.
	pub id: String,
	/// Entity type identifier (e.g. `minecraft:pig`).
	pub type_id: String,
}

/// Handle to a connected player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerRef {
	/// Host-assigned entity id.
	pub id: String,
	/// Display name.
	pub name: String,
}

/// Who or what triggered a command invocation.
///
/// Opaque to the registration layer; passed through to user callbacks untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOrigin {
	/// A player typed the command.
	Player(PlayerRef),
	/// A non-player entity ran the command (e.g. via `/execute`).
	Entity(EntityRef),
	/// A command block at the given location.
	Block { location: Vector3 },
	/// The server console or a script.
	Server,
}

impl CommandOrigin {
	/// Returns the invoking player, if the origin is a player.
	pub fn player(&self) -> Option<&PlayerRef> {
		match self {
			Self::Player(p) => Some(p),
			_ => None,
		}
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		match self {
			Self::Player(p) => format!("player:{}", p.name),
			Self::Entity(e) => format!("entity:{}", e.id),
			Self::Block { location } => format!("block:{},{},{}", location.x, location.y, location.z),
			Self::Server => "server".to_string(),
		}
	}
}
