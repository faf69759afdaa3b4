use cmdwrap_host::testing::{RecordedRegistry, RecordingHost};
use cmdwrap_host::{CommandOrigin, HostError, WrappedCallback};
use pretty_assertions::assert_eq;

use super::*;
use crate::parameter::{GenericType, ParameterDef};

fn register(ns: &str) -> CommandRegister {
	CommandRegister::new(RegisterConfig::new(ns)).unwrap()
}

fn noop(name: &str) -> CommandDef {
	CommandDef::new(name, "noop", |_, _| true)
}

#[test]
fn starts_created_and_empty() {
	let reg = register("ns");
	assert_eq!(reg.phase(), RegisterPhase::Created);
	assert!(reg.is_empty());
	assert_eq!(reg.namespace(), "ns");
	assert!(reg.last_report().is_none());
}

#[test]
fn with_defaults_applies_overrides() {
	let reg = CommandRegister::with_defaults("ns", Some(PermissionLevel::Any), Some(false)).unwrap();
	let config = reg.config();
	assert_eq!(config.default_permission_level, PermissionLevel::Any);
	assert!(!config.cheats_required);

	let reg = CommandRegister::with_defaults("ns", None, None).unwrap();
	assert_eq!(reg.config(), RegisterConfig::new("ns"));
}

#[test]
fn rejects_invalid_namespace() {
	assert!(matches!(
		CommandRegister::with_defaults("a:b", None, None),
		Err(ConfigError::InvalidNamespace(_))
	));
}

#[test]
fn queue_preserves_insertion_order() {
	let reg = register("ns");
	for name in ["c", "a", "b"] {
		reg.register_command(noop(name)).unwrap();
	}
	assert_eq!(reg.len(), 3);
	assert_eq!(reg.queued_names(), ["c", "a", "b"]);
}

#[test]
fn flush_drains_queue_and_closes() {
	let reg = register("ns");
	reg.register_command(noop("one")).unwrap();
	let mut host = RecordedRegistry::open();

	let report = reg.flush(&mut host).unwrap();
	assert_eq!(report.registered, ["ns:one"]);
	assert!(report.is_complete());
	assert_eq!(reg.phase(), RegisterPhase::Flushed);
	assert!(reg.is_empty());
	assert_eq!(reg.last_report(), Some(report));

	assert_eq!(
		reg.register_command(noop("late")),
		Err(RegisterError::Closed {
			namespace: "ns".into(),
			command: "late".into(),
		})
	);
	assert_eq!(reg.flush(&mut host), Err(RegisterError::AlreadyFlushed("ns".into())));
	assert_eq!(host.command_names(), ["ns:one"]);
}

#[test]
fn effective_settings_fall_back_to_defaults() {
	let reg = CommandRegister::new(
		RegisterConfig::new("ns")
			.default_permission_level(PermissionLevel::Admin)
			.cheats_required(false),
	)
	.unwrap();
	reg.register_command(noop("plain")).unwrap();
	reg.register_command(
		noop("explicit")
			.permission_level(PermissionLevel::Any)
			.cheats_required(true),
	)
	.unwrap();

	let mut host = RecordedRegistry::open();
	reg.flush(&mut host).unwrap();

	let plain = &host.find("ns:plain").unwrap().command;
	assert_eq!(plain.permission_level, PermissionLevel::Admin);
	assert!(!plain.cheats_required);

	let explicit = &host.find("ns:explicit").unwrap().command;
	assert_eq!(explicit.permission_level, PermissionLevel::Any);
	assert!(explicit.cheats_required);
}

#[test]
fn enum_values_registered_before_command() {
	let reg = register("ns");
	reg.register_command(
		noop("fill")
			.parameter(ParameterDef::mandatory("origin", GenericType::Location))
			.parameter(ParameterDef::enumeration("mode", ["default", "hollow", "walls"], false)),
	)
	.unwrap();

	let mut host = RecordedRegistry::open();
	reg.flush(&mut host).unwrap();

	assert_eq!(
		host.enum_values("ns:mode"),
		Some(&["default".to_string(), "hollow".to_string(), "walls".to_string()][..])
	);
	let fill = &host.find("ns:fill").unwrap().command;
	assert_eq!(fill.optional_parameters[0].name, "mode");
	assert_eq!(fill.optional_parameters[0].param_type, cmdwrap_host::ParamType::Enum);
}

#[test]
fn shared_enum_parameter_is_registered_once() {
	let mode = ParameterDef::enumeration("mode", ["a", "b"], true);
	let reg = register("ns");
	reg.register_command(noop("first").parameter(mode.clone())).unwrap();
	reg.register_command(noop("second").parameter(mode)).unwrap();

	let mut host = RecordedRegistry::open();
	let report = reg.flush(&mut host).unwrap();
	assert_eq!(report.registered, ["ns:first", "ns:second"]);
	assert_eq!(host.enums().len(), 1);
}

#[test]
fn conflicting_enum_values_are_rejected_by_host() {
	let reg = register("ns");
	reg.register_command(noop("first").parameter(ParameterDef::enumeration("mode", ["a"], true)))
		.unwrap();
	reg.register_command(noop("second").parameter(ParameterDef::enumeration("mode", ["b"], true)))
		.unwrap();

	let mut host = RecordedRegistry::open();
	let err = reg.flush(&mut host).unwrap_err();
	assert_eq!(
		err,
		RegisterError::Host {
			name: "ns:mode".into(),
			source: HostError::DuplicateEnum("ns:mode".into()),
		}
	);
	assert_eq!(host.command_names(), ["ns:first"]);
}

#[test]
fn empty_enum_aborts_before_any_host_call_for_that_command() {
	let reg = register("ns");
	reg.register_command(noop("ok")).unwrap();
	reg.register_command(
		noop("broken")
			.parameter(ParameterDef::enumeration("good", ["x"], true))
			.parameter(ParameterDef::enumeration("empty", Vec::<String>::new(), true)),
	)
	.unwrap();
	reg.register_command(noop("after")).unwrap();

	let mut host = RecordedRegistry::open();
	let err = reg.flush(&mut host).unwrap_err();
	assert_eq!(
		err,
		RegisterError::Definition(DefinitionError::MissingEnumValues {
			command: "broken".into(),
			parameter: "empty".into(),
		})
	);
	assert_eq!(host.command_names(), ["ns:ok"]);
	assert!(host.enums().is_empty());

	let report = reg.last_report().unwrap();
	assert_eq!(report.registered, ["ns:ok"]);
	assert_eq!(report.failed.len(), 1);
	assert_eq!(report.failed[0].0, "ns:broken");
	assert_eq!(report.skipped, ["ns:after"]);
	assert_eq!(reg.phase(), RegisterPhase::Flushed);
}

#[test]
fn continue_policy_isolates_failures() {
	let reg = CommandRegister::new(RegisterConfig::new("ns").flush_policy(FlushPolicy::Continue)).unwrap();
	reg.register_command(noop("dup")).unwrap();
	reg.register_command(noop("dup")).unwrap();
	reg.register_command(noop("after")).unwrap();

	let mut host = RecordedRegistry::open();
	let report = reg.flush(&mut host).unwrap();
	assert_eq!(report.registered, ["ns:dup", "ns:after"]);
	assert!(report.skipped.is_empty());
	assert_eq!(
		report.first_error(),
		Some(&RegisterError::Host {
			name: "ns:dup".into(),
			source: HostError::DuplicateCommand("ns:dup".into()),
		})
	);
	assert!(!report.is_complete());
}

#[test]
fn closed_host_window_surfaces_as_host_error() {
	let reg = register("ns");
	reg.register_command(noop("late")).unwrap();
	let mut host = RecordedRegistry::default();

	assert_eq!(
		reg.flush(&mut host),
		Err(RegisterError::Host {
			name: "ns:late".into(),
			source: HostError::StartupClosed,
		})
	);
}

#[test]
fn wrapped_callback_uses_declared_messages() {
	let reg = register("ns");
	reg.register_command(
		CommandDef::new("toggle", "flips", |_, args| args.get::<bool>(0))
			.parameter(ParameterDef::mandatory("on", GenericType::Boolean))
			.success_message("toggled")
			.failure_message("not toggled"),
	)
	.unwrap();
	let mut host = RecordedRegistry::open();
	reg.flush(&mut host).unwrap();

	let toggle = host.find("ns:toggle").unwrap();
	let on = toggle.invoke(&CommandOrigin::Server, &[cmdwrap_host::ArgValue::Bool(true)]);
	assert!(on.is_success());
	assert_eq!(on.message.as_deref(), Some("toggled"));

	let off = toggle.invoke(&CommandOrigin::Server, &[cmdwrap_host::ArgValue::Bool(false)]);
	assert!(!off.is_success());
	assert_eq!(off.message.as_deref(), Some("not toggled"));
}

#[test]
fn attach_subscribes_only_once() {
	let mut host = RecordingHost::new();
	let reg = CommandRegister::on_startup(RegisterConfig::new("ns"), &mut host).unwrap();
	assert!(reg.is_attached());

	assert!(!reg.attach(&mut host));
	assert_eq!(host.pending_hooks(), 1);

	reg.register_command(noop("a")).unwrap();
	host.fire_startup();
	let report = reg.last_report().unwrap();
	assert_eq!(report.registered, ["ns:a"]);
	assert!(report.is_complete());
	assert_eq!(host.registry().command_names(), ["ns:a"]);
}

/// Host registry that queues a command on the register it is being flushed from.
struct ReentrantRegistry {
	inner: RecordedRegistry,
	register: CommandRegister,
	attempts: Vec<(RegisterPhase, Result<(), RegisterError>)>,
}

impl CommandRegistry for ReentrantRegistry {
	fn register_enum(&mut self, name: &str, values: &[String]) -> Result<(), HostError> {
		self.inner.register_enum(name, values)
	}

	fn register_command(&mut self, command: NativeCommand, callback: WrappedCallback) -> Result<(), HostError> {
		let phase = self.register.phase();
		let attempt = self.register.register_command(noop("sneaky"));
		self.attempts.push((phase, attempt));
		self.inner.register_command(command, callback)
	}
}

#[test]
fn queueing_during_flush_is_closed() {
	let reg = register("ns");
	reg.register_command(noop("first")).unwrap();
	reg.register_command(noop("second")).unwrap();

	let mut host = ReentrantRegistry {
		inner: RecordedRegistry::open(),
		register: reg.clone(),
		attempts: Vec::new(),
	};
	let report = reg.flush(&mut host).unwrap();

	assert_eq!(report.registered, ["ns:first", "ns:second"]);
	assert_eq!(host.attempts.len(), 2);
	for (phase, attempt) in &host.attempts {
		assert_eq!(*phase, RegisterPhase::Flushing);
		assert_eq!(
			attempt,
			&Err(RegisterError::Closed {
				namespace: "ns".into(),
				command: "sneaky".into(),
			})
		);
	}
	assert!(reg.is_empty());
	assert_eq!(host.inner.command_names(), ["ns:first", "ns:second"]);
}
