//! Register configuration.

use cmdwrap_host::PermissionLevel;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What a flush does after one command fails to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushPolicy {
	/// Stop at the first failure; later commands are reported as skipped.
	#[default]
	Abort,
	/// Record the failure and keep registering the remaining commands.
	Continue,
}

/// Settings shared by every command queued on one register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterConfig {
	/// Prefix applied as `namespace:name` to every command and enum.
	pub namespace: String,
	/// Used when a command sets no permission level.
	#[serde(default)]
	pub default_permission_level: PermissionLevel,
	/// Used when a command does not say whether cheats are required.
	#[serde(default = "default_cheats_required")]
	pub cheats_required: bool,
	#[serde(default)]
	pub flush_policy: FlushPolicy,
}

fn default_cheats_required() -> bool {
	true
}

impl RegisterConfig {
	/// Creates a config with the host's most restrictive custom-command defaults.
	pub fn new(namespace: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			default_permission_level: PermissionLevel::default(),
			cheats_required: default_cheats_required(),
			flush_policy: FlushPolicy::default(),
		}
	}

	pub fn default_permission_level(mut self, level: PermissionLevel) -> Self {
		self.default_permission_level = level;
		self
	}

	pub fn cheats_required(mut self, required: bool) -> Self {
		self.cheats_required = required;
		self
	}

	pub fn flush_policy(mut self, policy: FlushPolicy) -> Self {
		self.flush_policy = policy;
		self
	}

	/// Parses and validates a TOML table.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects namespaces that would produce ambiguous qualified names.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let ns = &self.namespace;
		if ns.is_empty() || ns.contains(':') || ns.chars().any(char::is_whitespace) {
			return Err(ConfigError::InvalidNamespace(ns.clone()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
