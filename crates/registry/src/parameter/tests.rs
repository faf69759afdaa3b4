use cmdwrap_host::ParamType;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn define_parameter_returns_input_unchanged() {
	let mode = ParameterDef::enumeration("mode", ["default", "hollow", "walls"], true);
	assert_eq!(define_parameter(mode.clone()), mode);

	let allow_debt = ParameterDef::optional("allowDebt", GenericType::Boolean);
	assert_eq!(define_parameter(allow_debt.clone()), allow_debt);
}

#[test]
fn enum_parameter_keeps_value_order() {
	let mode = ParameterDef::enumeration("mode", ["walls", "default", "hollow"], false);
	assert_eq!(
		mode.enum_values(),
		Some(&["walls".to_string(), "default".to_string(), "hollow".to_string()][..])
	);
	assert!(mode.is_enum());
	assert!(!mode.mandatory);
	assert_eq!(mode.param_type(), ParamType::Enum);
}

#[test]
fn generic_parameter_has_no_values() {
	let amount = ParameterDef::mandatory("amount", GenericType::Integer);
	assert_eq!(amount.enum_values(), None);
	assert!(!amount.is_enum());
	assert_eq!(amount.param_type(), ParamType::Integer);
}

#[test]
fn to_native_keeps_unqualified_name() {
	let target = ParameterDef::mandatory("target", GenericType::PlayerSelector);
	let native = target.to_native();
	assert_eq!(native.name, "target");
	assert_eq!(native.param_type, ParamType::PlayerSelector);
}

#[test]
fn every_generic_type_maps_to_a_non_enum_host_type() {
	let all = [
		GenericType::BlockType,
		GenericType::Boolean,
		GenericType::EntitySelector,
		GenericType::EntityType,
		GenericType::Float,
		GenericType::Integer,
		GenericType::ItemType,
		GenericType::Location,
		GenericType::PlayerSelector,
		GenericType::String,
	];
	for ty in all {
		assert_ne!(ParamType::from(ty), ParamType::Enum, "{ty:?}");
	}
}
