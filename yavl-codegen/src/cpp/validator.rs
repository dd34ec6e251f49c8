//! Whole-spec validator generation.
//!
//! Emits `get_types()`, listing every declared type, and `validate_simple()`,
//! which decodes a node as the type named at runtime. An unknown type name
//! yields `(false, std::nullopt)` rather than an exception.

use crate::cpp::resolved_type_name;
use crate::emitter::Emitter;
use crate::naming::Naming;
use std::io;
use yavl_schema::TypeSpecification;

/// Emits the validator block for all types in `types`.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn emit_validator(
    out: &mut Emitter<'_>,
    naming: &dyn Naming,
    types: &TypeSpecification,
) -> io::Result<()> {
    let last = types.len().saturating_sub(1);

    out.writeln("inline std::vector<std::string> get_types() {")?;
    out.writeln("return {")?;
    for (i, (type_name, def)) in types.iter().enumerate() {
        let name = resolved_type_name(naming, type_name, def);
        let separator = if i == last { "" } else { "," };
        out.writeln(&format!("\"{name}\"{separator}"))?;
    }
    out.writeln("};")?;
    out.writeln("}")?;
    out.blank_line()?;

    out.writeln(
        "inline std::tuple<bool, std::optional<std::string>> validate_simple(const YAML::Node &node, const std::string type_name) {",
    )?;
    for (i, (type_name, def)) in types.iter().enumerate() {
        let name = resolved_type_name(naming, type_name, def);
        let condition = format!("if (type_name == \"{name}\") {{");
        if i == 0 {
            out.writeln(&condition)?;
        } else {
            out.writeln_inline(&condition)?;
        }
        let target = resolved_type_name(naming, type_name, def);
        out.writeln(&format!("return validate<{target}>(node);"))?;
        out.write("}")?;
        if i == last {
            out.writeln_inline("")?;
        } else {
            out.write_inline(" else ")?;
        }
    }
    out.writeln("return std::make_tuple(false, std::nullopt);")?;
    out.writeln("}")?;
    out.blank_line()
}
