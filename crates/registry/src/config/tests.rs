use pretty_assertions::assert_eq;

use super::*;

#[test]
fn new_uses_restrictive_defaults() {
	let config = RegisterConfig::new("ns");
	assert_eq!(config.default_permission_level, PermissionLevel::GameDirectors);
	assert!(config.cheats_required);
	assert_eq!(config.flush_policy, FlushPolicy::Abort);
}

#[test]
fn parses_full_toml() {
	let config = RegisterConfig::from_toml(
		r#"
		namespace = "demo"
		default_permission_level = "admin"
		cheats_required = false
		flush_policy = "continue"
		"#,
	)
	.unwrap();

	assert_eq!(
		config,
		RegisterConfig::new("demo")
			.default_permission_level(PermissionLevel::Admin)
			.cheats_required(false)
			.flush_policy(FlushPolicy::Continue)
	);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
	let config = RegisterConfig::from_toml(r#"namespace = "demo""#).unwrap();
	assert_eq!(config, RegisterConfig::new("demo"));
}

#[test]
fn rejects_unknown_keys() {
	let err = RegisterConfig::from_toml("namespace = \"demo\"\ncheats = true").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
}

#[test]
fn rejects_bad_namespaces() {
	for ns in ["", "a:b", "two words"] {
		assert_eq!(
			RegisterConfig::new(ns).validate(),
			Err(ConfigError::InvalidNamespace(ns.to_string()))
		);
	}
	assert!(RegisterConfig::from_toml(r#"namespace = "x:y""#).is_err());
}
