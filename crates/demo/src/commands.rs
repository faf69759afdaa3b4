//! Example commands.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use cmdwrap_host::{PermissionLevel, PlayerRef, Vector3};
use cmdwrap_registry::{
	ArgError, CommandDef, CommandRegister, DefinitionError, GenericType, ParameterDef, define_command,
	define_parameter,
};
use parking_lot::Mutex;

/// Balances keyed by player name.
pub type Ledger = Arc<Mutex<HashMap<String, i32>>>;

static FILL_MODE: LazyLock<ParameterDef> = LazyLock::new(|| {
	define_parameter(ParameterDef::enumeration("mode", ["default", "hollow", "walls"], false))
});

/// Runs a command if a roll over its text lands under the percentage.
pub fn chance() -> Result<CommandDef, DefinitionError> {
	let percentage = define_parameter(ParameterDef::mandatory("percentageChance", GenericType::Integer));
	let command = define_parameter(ParameterDef::mandatory("command", GenericType::String));

	define_command(
		CommandDef::new(
			"chance",
			"Runs a command randomly, according to if generated number is less than percentage chance.",
			|_, args| -> Result<bool, ArgError> {
				let chance: i32 = args.get(0)?;
				let command: String = args.get(1)?;
				let roll = command.bytes().fold(7u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32)) % 100;
				tracing::info!(chance, roll, command = %command, "chance rolled");
				Ok((roll as i32) < chance)
			},
		)
		.permission_level(PermissionLevel::GameDirectors)
		.cheats_required(true)
		.success_message("The odds were in your favour.")
		.failure_message("Not this time.")
		.parameters([percentage, command]),
	)
}

/// Fills the box between two corners.
pub fn fill() -> Result<CommandDef, DefinitionError> {
	define_command(
		CommandDef::new("fill", "Fills an area with a block.", |origin, args| -> Result<(), ArgError> {
			let from: Vector3 = args.get(0)?;
			let to: Vector3 = args.get(1)?;
			let block: String = args.get(2)?;
			let mode = args.optional::<String>(3)?.unwrap_or_else(|| "default".into());
			let volume = ((to.x - from.x).abs() + 1.0) * ((to.y - from.y).abs() + 1.0) * ((to.z - from.z).abs() + 1.0);
			tracing::info!(origin = %origin.describe(), block = %block, mode = %mode, volume, "fill");
			Ok(())
		})
		.success_message("Area filled.")
		.failure_message("Could not fill area.")
		.parameter(ParameterDef::mandatory("from", GenericType::Location))
		.parameter(ParameterDef::mandatory("to", GenericType::Location))
		.parameter(ParameterDef::mandatory("block", GenericType::BlockType))
		.parameter(FILL_MODE.clone()),
	)
}

/// Adds to the balance of every selected player.
pub fn money(ledger: Ledger) -> Result<CommandDef, DefinitionError> {
	let allow_debt = define_parameter(ParameterDef::optional("allowDebt", GenericType::Boolean));

	define_command(
		CommandDef::new("money", "Adjusts player balances.", move |_, args| -> Result<bool, ArgError> {
			let targets: Vec<PlayerRef> = args.get(0)?;
			let amount: i32 = args.get(1)?;
			let allow_debt = args.optional::<bool>(2)?.unwrap_or(false);

			let mut ledger = ledger.lock();
			let would_overdraw = targets
				.iter()
				.any(|p| ledger.get(&p.name).copied().unwrap_or(0) + amount < 0);
			if would_overdraw && !allow_debt {
				return Ok(false);
			}
			for player in &targets {
				*ledger.entry(player.name.clone()).or_default() += amount;
			}
			Ok(true)
		})
		.permission_level(PermissionLevel::Admin)
		.cheats_required(false)
		.success_message("Balance updated.")
		.failure_message("Insufficient funds.")
		.parameter(ParameterDef::mandatory("target", GenericType::PlayerSelector))
		.parameter(ParameterDef::mandatory("amount", GenericType::Integer))
		.parameter(allow_debt),
	)
}

/// Queues every example command on `register`.
pub fn register_all(register: &CommandRegister, ledger: Ledger) -> anyhow::Result<()> {
	for command in [chance()?, fill()?, money(ledger)?] {
		register.register_command(command)?;
	}
	Ok(())
}
