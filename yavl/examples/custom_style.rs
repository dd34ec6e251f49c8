//! Custom naming and declaration style.
//!
//! Generates a header where map types become classes with `m_`-prefixed
//! members and enumerators are scoped by their type name.
//!
//! Run with: `cargo run --example custom_style`

use std::io;
use yavl::codegen::cpp::emit_map_members;
use yavl::prelude::*;

const SPEC: &str = r#"
ExtraIncludes:
  - "<string>"
Types:
  Color: [Red, Green, Blue]
  Pixel:
    position: "int[2]"
    color: Color
    label: "std::optional<std::string>"
"#;

/// Prefixes members and scopes enumerators.
struct Members;

impl Naming for Members {
    fn map_field_identifier(&self, field_name: &str, _: &str, _: &MapDef) -> String {
        format!("m_{field_name}")
    }

    fn enum_choice_identifier(&self, choice: &str, owner_name: &str, _: &EnumDef) -> String {
        format!("{owner_name}::{choice}")
    }
}

/// Declares maps as classes and enums as scoped enums.
struct Classes;

impl DeclarationStyle for Classes {
    fn name(&self) -> &'static str {
        "class"
    }

    fn emit_map_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &MapDef,
    ) -> io::Result<()> {
        let ident = naming.map_type_identifier(type_name);
        out.writeln(&format!("class {ident} {{"))?;
        out.writeln("public:")?;
        emit_map_members(out, naming, type_name, def)?;
        out.writeln("};")?;
        out.blank_line()
    }

    fn emit_enum_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &EnumDef,
    ) -> io::Result<()> {
        out.writeln(&format!(
            "enum class {} {{",
            naming.enum_type_identifier(type_name)
        ))?;
        let last = def.choices.len().saturating_sub(1);
        for (i, choice) in def.choices.iter().enumerate() {
            let separator = if i == last { "" } else { "," };
            out.writeln(&format!("{choice}{separator}"))?;
        }
        out.writeln("};")?;
        out.blank_line()
    }
}

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let spec = load_spec(SPEC, true)?;
    let header = Generator::new(&spec)
        .with_naming(Members)
        .with_declarations(Classes)
        .generate()?;

    println!("{header}");
    Ok(())
}
