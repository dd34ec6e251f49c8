//! Spec meta-schema validation.
//!
//! This module checks a raw YAML document against the schema every YAVL
//! spec must follow. Key checks use the same two-pass contract the
//! generated readers enforce: all required keys are checked before any
//! superfluous key is reported.

use crate::error::SchemaError;
use crate::parser::{
    KEY_CUSTOM_CODE_GENERATOR, KEY_EXTRA_INCLUDES, KEY_TYPES, SPEC_TYPE_NAME, scalar_to_string,
};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

/// Root keys of a spec document and whether each is required.
const SPEC_KEYS: &[(&str, bool)] = &[
    (KEY_EXTRA_INCLUDES, false),
    (KEY_CUSTOM_CODE_GENERATOR, false),
    (KEY_TYPES, true),
];

/// Validates a decoded spec document against the meta-schema.
///
/// # Arguments
/// * `doc` - The decoded YAML document
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_spec(doc: &Value) -> Result<(), SchemaError> {
    let root = doc.as_mapping().ok_or_else(|| {
        SchemaError::validation(format!("'{SPEC_TYPE_NAME}' document must be a mapping"))
    })?;

    check_keys(SPEC_TYPE_NAME, root, SPEC_KEYS)?;
    validate_extra_includes(root)?;
    validate_custom_code_generator(root)?;
    validate_types(root)?;
    Ok(())
}

/// Checks a mapping's keys against a required/optional table.
///
/// Every required key is checked before any key is reported as superfluous.
pub fn check_keys(element: &str, map: &Mapping, keys: &[(&str, bool)]) -> Result<(), SchemaError> {
    for (key, required) in keys {
        if *required && !map.contains_key(*key) {
            return Err(SchemaError::missing_key(element, *key));
        }
    }
    for key in map.keys() {
        let name = scalar_to_string(key).unwrap_or_else(|| format!("{key:?}"));
        if !keys.iter().any(|(k, _)| *k == name) {
            return Err(SchemaError::superfluous_key(element, name));
        }
    }
    Ok(())
}

/// `ExtraIncludes` must be a sequence of scalars when present.
fn validate_extra_includes(root: &Mapping) -> Result<(), SchemaError> {
    match root.get(KEY_EXTRA_INCLUDES) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Sequence(items)) => {
            if items.iter().all(|i| scalar_to_string(i).is_some()) {
                Ok(())
            } else {
                Err(SchemaError::validation(
                    "'ExtraIncludes' entries must be scalars",
                ))
            }
        }
        Some(_) => Err(SchemaError::validation(
            "'ExtraIncludes' must be a sequence",
        )),
    }
}

/// `CustomCodeGenerator` must be a pair of scalars when present.
fn validate_custom_code_generator(root: &Mapping) -> Result<(), SchemaError> {
    match root.get(KEY_CUSTOM_CODE_GENERATOR) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Sequence(items))
            if items.len() == 2 && items.iter().all(|i| scalar_to_string(i).is_some()) =>
        {
            Ok(())
        }
        Some(_) => Err(SchemaError::validation(
            "'CustomCodeGenerator' must be a [module, class] pair of scalars",
        )),
    }
}

/// Validates every type definition under `Types`.
fn validate_types(root: &Mapping) -> Result<(), SchemaError> {
    let types = root
        .get(KEY_TYPES)
        .and_then(Value::as_mapping)
        .ok_or_else(|| SchemaError::validation("'Types' must be a mapping"))?;

    for (key, type_info) in types {
        let type_name = scalar_to_string(key)
            .ok_or_else(|| SchemaError::validation("type names must be scalars"))?;
        validate_type(&type_name, type_info)?;
    }
    Ok(())
}

/// Validates a single type definition's shape.
fn validate_type(type_name: &str, type_info: &Value) -> Result<(), SchemaError> {
    match type_info {
        Value::Mapping(fields) => {
            for (field_name, field_type) in fields {
                let field_name = scalar_to_string(field_name).ok_or_else(|| {
                    SchemaError::invalid_type(type_name, "field names must be scalars")
                })?;
                if scalar_to_string(field_type).is_none() {
                    return Err(SchemaError::invalid_type(
                        type_name,
                        format!("field '{field_name}' must have a scalar type"),
                    ));
                }
            }
            Ok(())
        }
        Value::Sequence(choices) => {
            let mut seen = HashSet::new();
            for choice in choices {
                let Some(choice) = scalar_to_string(choice) else {
                    return Err(SchemaError::invalid_type(
                        type_name,
                        "choices must be scalars",
                    ));
                };
                if !seen.insert(choice.clone()) {
                    return Err(SchemaError::invalid_type(
                        type_name,
                        format!("duplicate choice '{choice}'"),
                    ));
                }
            }
            Ok(())
        }
        other => match scalar_to_string(other) {
            Some(_) => Ok(()),
            None => Err(SchemaError::invalid_type(
                type_name,
                "alias target must be a scalar type string",
            )),
        },
    }
}
