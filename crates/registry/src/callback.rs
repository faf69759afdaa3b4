//! Callback wrapping and typed argument access.
//!
//! User callbacks receive the invocation origin plus a [`CommandArgs`] view and may
//! return `()`, `bool`, or a `Result` of either. [`wrap_callback`] turns any of those,
//! and any panic, into a host [`CommandResult`].

use std::fmt::Display;
use std::panic::{AssertUnwindSafe, catch_unwind};

use cmdwrap_host::{ArgValue, CommandOrigin, CommandResult, EntityRef, ParamType, PlayerRef, Vector3, WrappedCallback};
use thiserror::Error;

/// Normalized outcome of a user callback.
pub type Outcome = Result<(), CallbackFailure>;

/// Type-erased user callback stored on a [`crate::CommandDef`].
pub type CommandCallback = Box<dyn Fn(&CommandOrigin, &CommandArgs<'_>) -> Outcome + Send + Sync>;

/// Why a command invocation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackFailure {
	/// The callback returned `false`.
	#[error("callback returned false")]
	ReturnedFalse,
	/// The callback returned an error.
	#[error("{0}")]
	Error(String),
	/// The callback panicked.
	#[error("callback panicked: {0}")]
	Panicked(String),
}

/// Converts a callback return value into an [`Outcome`].
pub trait IntoOutcome {
	fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
	fn into_outcome(self) -> Outcome {
		Ok(())
	}
}

impl IntoOutcome for bool {
	fn into_outcome(self) -> Outcome {
		if self { Ok(()) } else { Err(CallbackFailure::ReturnedFalse) }
	}
}

impl<E: Display> IntoOutcome for Result<(), E> {
	fn into_outcome(self) -> Outcome {
		self.map_err(|e| CallbackFailure::Error(e.to_string()))
	}
}

impl<E: Display> IntoOutcome for Result<bool, E> {
	fn into_outcome(self) -> Outcome {
		match self {
			Ok(ok) => ok.into_outcome(),
			Err(e) => Err(CallbackFailure::Error(e.to_string())),
		}
	}
}

/// Errors from typed argument access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
	/// No argument at this position.
	#[error("missing argument at position {0}")]
	Missing(usize),
	/// Argument exists but has a different type.
	#[error("argument {index}: expected {expected}, got {found}")]
	TypeMismatch {
		index: usize,
		expected: &'static str,
		found: ParamType,
	},
}

/// Extraction of a Rust value from a host argument.
pub trait FromArg: Sized {
	/// Name used in mismatch errors.
	const EXPECTED: &'static str;

	fn from_arg(value: &ArgValue) -> Option<Self>;
}

impl FromArg for bool {
	const EXPECTED: &'static str = "boolean";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl FromArg for i32 {
	const EXPECTED: &'static str = "integer";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::Integer(i) => Some(*i),
			_ => None,
		}
	}
}

impl FromArg for f32 {
	const EXPECTED: &'static str = "float";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::Float(f) => Some(*f),
			// Only integers an f32 represents exactly.
			ArgValue::Integer(i) if i.unsigned_abs() <= 1 << f32::MANTISSA_DIGITS => Some(*i as f32),
			_ => None,
		}
	}
}

/// Accepts every string-valued argument: strings, enum values, and type identifiers.
impl FromArg for String {
	const EXPECTED: &'static str = "string";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::String(s)
			| ArgValue::Enum(s)
			| ArgValue::Block(s)
			| ArgValue::EntityType(s)
			| ArgValue::Item(s) => Some(s.clone()),
			_ => None,
		}
	}
}

impl FromArg for Vector3 {
	const EXPECTED: &'static str = "location";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::Location(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromArg for Vec<EntityRef> {
	const EXPECTED: &'static str = "entity selector";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::Entities(e) => Some(e.clone()),
			_ => None,
		}
	}
}

impl FromArg for Vec<PlayerRef> {
	const EXPECTED: &'static str = "player selector";

	fn from_arg(value: &ArgValue) -> Option<Self> {
		match value {
			ArgValue::Players(p) => Some(p.clone()),
			_ => None,
		}
	}
}

/// Positional arguments of one invocation.
///
/// Indices follow the command's declared parameter order; trailing optional
/// arguments may be absent.
#[derive(Debug, Clone, Copy)]
pub struct CommandArgs<'a> {
	values: &'a [ArgValue],
}

impl<'a> CommandArgs<'a> {
	pub fn new(values: &'a [ArgValue]) -> Self {
		Self { values }
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Raw argument at `index`.
	pub fn raw(&self, index: usize) -> Option<&'a ArgValue> {
		self.values.get(index)
	}

	/// Extracts a required argument.
	pub fn get<T: FromArg>(&self, index: usize) -> Result<T, ArgError> {
		self.optional(index)?.ok_or(ArgError::Missing(index))
	}

	/// Extracts an argument that may have been omitted.
	pub fn optional<T: FromArg>(&self, index: usize) -> Result<Option<T>, ArgError> {
		let Some(value) = self.values.get(index) else {
			return Ok(None);
		};
		T::from_arg(value).map(Some).ok_or(ArgError::TypeMismatch {
			index,
			expected: T::EXPECTED,
			found: value.param_type(),
		})
	}
}

/// Erases a user callback into a [`CommandCallback`].
pub fn erase_callback<F, R>(callback: F) -> CommandCallback
where
	F: Fn(&CommandOrigin, &CommandArgs<'_>) -> R + Send + Sync + 'static,
	R: IntoOutcome,
{
	Box::new(move |origin: &CommandOrigin, args: &CommandArgs<'_>| callback(origin, args).into_outcome())
}

/// Wraps a callback so its outcome maps onto the declared messages.
///
/// Errors, panics, and `false` produce `failure_message` with
/// [`cmdwrap_host::CommandStatus::Failure`]; anything else produces `success_message`.
/// Nothing escapes to the host.
pub fn wrap_callback(
	command: String,
	callback: CommandCallback,
	success_message: Option<String>,
	failure_message: Option<String>,
) -> WrappedCallback {
	Box::new(move |origin: &CommandOrigin, values: &[ArgValue]| {
		let args = CommandArgs::new(values);
		let outcome = catch_unwind(AssertUnwindSafe(|| callback(origin, &args)))
			.unwrap_or_else(|payload| Err(CallbackFailure::Panicked(panic_message(payload.as_ref()))));

		match outcome {
			Ok(()) => CommandResult::success(success_message.clone()),
			Err(CallbackFailure::ReturnedFalse) => {
				tracing::debug!(command = %command, origin = %origin.describe(), "command reported failure");
				CommandResult::failure(failure_message.clone())
			}
			Err(failure) => {
				tracing::warn!(command = %command, origin = %origin.describe(), error = %failure, "command callback failed");
				CommandResult::failure(failure_message.clone())
			}
		}
	})
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"non-string panic payload".to_string()
	}
}
