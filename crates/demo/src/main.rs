//! Registers the example command set against an in-memory host and runs a few
//! invocations.
//!
//! Set `CMDWRAP_CONFIG` to a TOML file to override the register configuration.

use std::sync::Arc;

use anyhow::Context;
use cmdwrap_host::testing::RecordingHost;
use cmdwrap_host::{ArgValue, CommandOrigin, PlayerRef, Vector3};
use cmdwrap_registry::{CommandRegister, RegisterConfig};
use tracing::info;

mod commands;

fn main() -> anyhow::Result<()> {
	setup_tracing();

	let config = load_config()?;
	let mut host = RecordingHost::new();
	let register = CommandRegister::on_startup(config, &mut host)?;
	let ledger = commands::Ledger::default();
	commands::register_all(&register, Arc::clone(&ledger))?;
	info!(namespace = %register.namespace(), queued = register.len(), "commands queued");

	host.fire_startup();
	if let Some(report) = register.last_report() {
		info!(registered = ?report.registered, skipped = ?report.skipped, "startup finished");
	}

	let ns = register.namespace();
	let steve = PlayerRef {
		id: "-4294967295".into(),
		name: "Steve".into(),
	};
	let origin = CommandOrigin::Player(steve.clone());
	let calls = [
		("chance", vec![ArgValue::Integer(75), ArgValue::String("say hi".into())]),
		(
			"fill",
			vec![
				ArgValue::Location(Vector3::new(0.0, 64.0, 0.0)),
				ArgValue::Location(Vector3::new(4.0, 68.0, 4.0)),
				ArgValue::Block("minecraft:stone".into()),
				ArgValue::Enum("hollow".into()),
			],
		),
		("money", vec![ArgValue::Players(vec![steve.clone()]), ArgValue::Integer(-10)]),
		("money", vec![ArgValue::Players(vec![steve]), ArgValue::Integer(25)]),
	];

	for (name, args) in calls {
		let qualified = cmdwrap_registry::namespaced(&ns, name);
		let result = host
			.invoke(&qualified, &origin, &args)
			.with_context(|| format!("command {qualified} was not registered"))?;
		info!(command = %qualified, status = ?result.status, message = ?result.message, "invoked");
	}

	let balances = ledger.lock().clone();
	info!(?balances, "final ledger");
	Ok(())
}

fn load_config() -> anyhow::Result<RegisterConfig> {
	match std::env::var("CMDWRAP_CONFIG") {
		Ok(path) => {
			let source = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
			Ok(RegisterConfig::from_toml(&source)?)
		}
		Err(_) => Ok(RegisterConfig::new("demo")),
	}
}

fn setup_tracing() {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("cmdwrap_registry=debug,cmdwrap_demo=info,info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}
