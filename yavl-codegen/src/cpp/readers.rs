//! Reader (YAML → type) generation.
//!
//! Generated map readers run two passes over the input before touching any
//! field: every required key must be present (`MissingKeyException`), then
//! every present key must be declared (`SuperfluousKeyException`). Fields
//! are then read through their own `operator>>`, so nested types apply the
//! same checks. Aliases need no reader of their own.

use crate::emitter::Emitter;
use crate::naming::Naming;
use std::io;
use yavl_schema::{EnumDef, MapDef};

/// Emits `operator>>` for a map type.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn emit_map_reader(
    out: &mut Emitter<'_>,
    naming: &dyn Naming,
    type_name: &str,
    def: &MapDef,
) -> io::Result<()> {
    out.writeln(&format!(
        "inline void operator>>(const YAML::Node &input, {} &output) {{",
        naming.map_type_identifier(type_name)
    ))?;
    out.writeln("const std::unordered_map<std::string, bool> keys = {")?;
    let last = def.len().saturating_sub(1);
    for (i, field_name) in def.fields.keys().enumerate() {
        let required = def.is_required(field_name);
        let separator = if i == last { "" } else { "," };
        out.writeln(&format!("{{\"{field_name}\", {required}}}{separator}"))?;
    }
    out.writeln("};")?;

    out.writeln("for (const auto &[key, is_required] : keys) {")?;
    out.writeln("if (is_required && !input[key]) {")?;
    out.writeln(&format!(
        "throw YAVL::MissingKeyException(\"{type_name}\", key);"
    ))?;
    out.writeln("}")?;
    out.writeln("}")?;

    out.writeln("for (const auto &it : input) {")?;
    out.writeln("const std::string key = it.first.as<std::string>();")?;
    out.writeln("if (!keys.contains(key)) {")?;
    out.writeln(&format!(
        "throw YAVL::SuperfluousKeyException(\"{type_name}\", key);"
    ))?;
    out.writeln("}")?;
    out.writeln("}")?;

    for field_name in def.fields.keys() {
        out.writeln(&format!(
            "input[\"{field_name}\"] >> output.{};",
            naming.map_field_identifier(field_name, type_name, def)
        ))?;
    }
    out.writeln("}")?;
    out.blank_line()
}

/// Emits `operator>>` for an enum type.
///
/// Tokens are compared case-sensitively in declaration order; anything else
/// raises `BadConversionException`.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn emit_enum_reader(
    out: &mut Emitter<'_>,
    naming: &dyn Naming,
    type_name: &str,
    def: &EnumDef,
) -> io::Result<()> {
    out.writeln(&format!(
        "inline void operator>>(const YAML::Node &input, {} &output) {{",
        naming.enum_type_identifier(type_name)
    ))?;
    out.writeln("std::string tmp;")?;
    out.writeln("input >> tmp;")?;
    for (i, choice) in def.choices.iter().enumerate() {
        let condition = format!("if (tmp == \"{choice}\") {{");
        if i == 0 {
            out.writeln(&condition)?;
        } else {
            out.writeln_inline(&condition)?;
        }
        out.writeln(&format!(
            "output = {};",
            naming.enum_choice_identifier(choice, type_name, def)
        ))?;
        out.write("}")?;
        out.write_inline(" else ")?;
    }
    if def.choices.is_empty() {
        out.writeln("{")?;
    } else {
        out.writeln_inline("{")?;
    }
    out.writeln(&format!(
        "throw YAVL::BadConversionException(input, \"{type_name}\");"
    ))?;
    out.writeln("}")?;
    out.writeln("}")?;
    out.blank_line()
}
