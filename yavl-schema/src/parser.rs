//! YAVL spec loader.
//!
//! This module turns YAML spec documents into the in-memory [`Spec`]
//! representation. Every type definition is classified exactly once here;
//! code generation never looks at raw YAML again.

use crate::error::{ParseError, SchemaError};
use crate::ir::{TypeKind, classify};
use crate::types::{AliasDef, CustomCodeGenerator, EnumDef, MapDef, Spec, TypeDef};
use crate::validation::validate_spec;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Root key holding the type definitions.
pub const KEY_TYPES: &str = "Types";
/// Root key holding extra include targets.
pub const KEY_EXTRA_INCLUDES: &str = "ExtraIncludes";
/// Root key naming a custom declaration style.
pub const KEY_CUSTOM_CODE_GENERATOR: &str = "CustomCodeGenerator";
/// Name the spec document itself goes by in diagnostics.
pub const SPEC_TYPE_NAME: &str = "SpecType";

/// Parses a YAVL spec from YAML text.
///
/// # Arguments
/// * `yaml` - YAML spec content
///
/// # Returns
/// Parsed spec or parse error.
///
/// # Errors
/// Returns `ParseError` if the YAML is malformed or a type definition cannot
/// be classified into a usable shape.
pub fn parse_spec(yaml: &str) -> Result<Spec, ParseError> {
    let doc: Value = serde_yaml::from_str(yaml)?;
    parse_spec_value(&doc)
}

/// Builds a spec from an already decoded YAML document.
///
/// # Errors
/// Returns `ParseError` if the document structure is unusable.
pub fn parse_spec_value(doc: &Value) -> Result<Spec, ParseError> {
    let root = doc
        .as_mapping()
        .ok_or_else(|| ParseError::structure("spec root must be a mapping"))?;

    let mut spec = Spec::new();
    spec.extra_includes = parse_extra_includes(root)?;
    spec.custom_code_generator = parse_custom_code_generator(root)?;

    let types = match root.get(KEY_TYPES) {
        Some(Value::Mapping(types)) => types,
        Some(_) => return Err(ParseError::structure("'Types' must be a mapping")),
        None => return Err(ParseError::structure("missing 'Types' section")),
    };

    for (key, type_info) in types {
        let type_name = scalar_to_string(key)
            .ok_or_else(|| ParseError::structure("type names must be scalars"))?;
        let type_def = parse_type_def(&type_name, type_info)?;
        tracing::debug!(type_name = %type_name, kind = %type_def.kind(), "classified type");
        if !spec.add_type(type_name.clone(), type_def) {
            return Err(ParseError::duplicate("type", type_name));
        }
    }

    Ok(spec)
}

/// Loads a spec from YAML text, optionally checking it against the
/// meta-schema first.
///
/// # Errors
/// Returns `SchemaError` if parsing or meta-schema validation fails.
pub fn load_spec(yaml: &str, validate: bool) -> Result<Spec, SchemaError> {
    let doc: Value = serde_yaml::from_str(yaml).map_err(ParseError::from)?;
    if validate {
        validate_spec(&doc)?;
    }
    Ok(parse_spec_value(&doc)?)
}

/// Loads a spec from a file.
///
/// # Errors
/// Returns `SchemaError` if reading, parsing or validation fails.
pub fn load_spec_file(path: &Path, validate: bool) -> Result<Spec, SchemaError> {
    let yaml = std::fs::read_to_string(path).map_err(ParseError::from)?;
    load_spec(&yaml, validate)
}

/// Parses a single type definition according to its shape.
fn parse_type_def(type_name: &str, type_info: &Value) -> Result<TypeDef, ParseError> {
    match classify(type_info) {
        TypeKind::Map => {
            let mut map = MapDef::new();
            if let Value::Mapping(fields) = type_info {
                for (key, field_type) in fields {
                    let field_name = scalar_to_string(key).ok_or_else(|| {
                        ParseError::invalid_type(type_name, "map", "field names must be scalars")
                    })?;
                    let field_type = scalar_to_string(field_type).ok_or_else(|| {
                        ParseError::invalid_type(
                            type_name,
                            "map",
                            format!("field '{field_name}' must have a scalar type"),
                        )
                    })?;
                    if map.fields.contains_key(&field_name) {
                        return Err(ParseError::duplicate(
                            "field",
                            format!("{type_name}.{field_name}"),
                        ));
                    }
                    map.fields.insert(field_name, field_type);
                }
            }
            Ok(TypeDef::Map(map))
        }
        TypeKind::Enum => {
            let mut choices: Vec<String> = Vec::new();
            if let Value::Sequence(items) = type_info {
                for item in items {
                    let choice = scalar_to_string(item).ok_or_else(|| {
                        ParseError::invalid_type(type_name, "enum", "choices must be scalars")
                    })?;
                    if choices.contains(&choice) {
                        return Err(ParseError::duplicate(
                            "enum choice",
                            format!("{type_name}.{choice}"),
                        ));
                    }
                    choices.push(choice);
                }
            }
            Ok(TypeDef::Enum(EnumDef { choices }))
        }
        TypeKind::Alias => scalar_to_string(type_info)
            .map(|target| TypeDef::Alias(AliasDef { target }))
            .ok_or_else(|| {
                ParseError::invalid_type(type_name, "alias", "target must be a scalar type string")
            }),
    }
}

/// Parses the optional `ExtraIncludes` list. A null value counts as absent.
fn parse_extra_includes(root: &Mapping) -> Result<Vec<String>, ParseError> {
    match root.get(KEY_EXTRA_INCLUDES) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                scalar_to_string(item)
                    .ok_or_else(|| ParseError::structure("'ExtraIncludes' entries must be scalars"))
            })
            .collect(),
        Some(_) => Err(ParseError::structure("'ExtraIncludes' must be a sequence")),
    }
}

/// Parses the optional `CustomCodeGenerator` pair. A null value counts as absent.
fn parse_custom_code_generator(root: &Mapping) -> Result<Option<CustomCodeGenerator>, ParseError> {
    match root.get(KEY_CUSTOM_CODE_GENERATOR) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Sequence(items)) => match items.as_slice() {
            [module, class] => match (scalar_to_string(module), scalar_to_string(class)) {
                (Some(module), Some(class)) => Ok(Some(CustomCodeGenerator { module, class })),
                _ => Err(ParseError::structure(
                    "'CustomCodeGenerator' entries must be scalars",
                )),
            },
            _ => Err(ParseError::structure(
                "'CustomCodeGenerator' must be a [module, class] pair",
            )),
        },
        Some(_) => Err(ParseError::structure(
            "'CustomCodeGenerator' must be a [module, class] pair",
        )),
    }
}

/// Reads a scalar the way a YAML scalar reads as a string.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
