//! Typed custom command definitions with deferred host registration.
//!
//! Commands are declared up front and registered in one batch when the host fires
//! its startup signal:
//! - [`define_parameter`] / [`ParameterDef`]: one command argument, generic or enum
//! - [`define_command`] / [`CommandDef`]: a command, rejected if a mandatory parameter
//!   follows an optional one
//! - [`CommandRegister`]: queues commands and flushes them under `namespace:name`
//!
//! # Example
//!
//! ```
//! use cmdwrap_host::testing::RecordingHost;
//! use cmdwrap_registry::{CommandDef, CommandRegister, GenericType, ParameterDef, RegisterConfig, define_command};
//!
//! let mut host = RecordingHost::new();
//! let register = CommandRegister::on_startup(RegisterConfig::new("ns"), &mut host).unwrap();
//!
//! let flag = ParameterDef::mandatory("flag", GenericType::Boolean);
//! let chance = define_command(CommandDef::new("chance", "Flip a coin", |_, _| true).parameter(flag)).unwrap();
//! register.register_command(chance).unwrap();
//!
//! host.fire_startup();
//! assert_eq!(host.registry().command_names(), ["ns:chance"]);
//! ```

mod callback;
mod command;
mod config;
mod error;
mod parameter;
mod register;

pub use callback::{
	ArgError, CallbackFailure, CommandArgs, CommandCallback, FromArg, IntoOutcome, Outcome,
	wrap_callback,
};
pub use command::{CommandDef, define_command, validate_parameter_order};
pub use config::{FlushPolicy, RegisterConfig};
pub use error::{ConfigError, DefinitionError, RegisterError};
pub use parameter::{GenericType, ParameterDef, ParameterKind, define_parameter};
pub use register::{CommandRegister, FlushReport, RegisterPhase};

/// Qualifies `name` with `namespace` as `namespace:name`.
pub fn namespaced(namespace: &str, name: &str) -> String {
	format!("{namespace}:{name}")
}
