//! Writer (type → YAML) generation.

use crate::emitter::Emitter;
use crate::naming::Naming;
use std::io;
use yavl_schema::{EnumDef, MapDef};

/// Emits `operator<<` for a map type: one key/value pair per field, in
/// declaration order.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn emit_map_writer(
    out: &mut Emitter<'_>,
    naming: &dyn Naming,
    type_name: &str,
    def: &MapDef,
) -> io::Result<()> {
    out.writeln(&format!(
        "inline YAML::Emitter& operator<<(YAML::Emitter &output, const {} &input) {{",
        naming.map_type_identifier(type_name)
    ))?;
    out.writeln("output << YAML::BeginMap;")?;
    for field_name in def.fields.keys() {
        out.writeln(&format!("output << YAML::Key << \"{field_name}\";"))?;
        out.writeln(&format!(
            "output << YAML::Value << input.{};",
            naming.map_field_identifier(field_name, type_name, def)
        ))?;
    }
    out.writeln("output << YAML::EndMap;")?;
    out.writeln("return output;")?;
    out.writeln("}")?;
    out.blank_line()
}

/// Emits `operator<<` for an enum type.
///
/// The first matching choice in declaration order is written. A value that
/// matches no declared choice writes nothing.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn emit_enum_writer(
    out: &mut Emitter<'_>,
    naming: &dyn Naming,
    type_name: &str,
    def: &EnumDef,
) -> io::Result<()> {
    out.writeln(&format!(
        "inline YAML::Emitter& operator<<(YAML::Emitter &output, const {} &input) {{",
        naming.enum_type_identifier(type_name)
    ))?;
    let last = def.choices.len().saturating_sub(1);
    for (i, choice) in def.choices.iter().enumerate() {
        let condition = format!(
            "if (input == {}) {{",
            naming.enum_choice_identifier(choice, type_name, def)
        );
        if i == 0 {
            out.writeln(&condition)?;
        } else {
            out.writeln_inline(&condition)?;
        }
        out.writeln(&format!("output << \"{choice}\";"))?;
        out.write("}")?;
        if i == last {
            out.writeln_inline("")?;
        } else {
            out.write_inline(" else ")?;
        }
    }
    out.writeln("return output;")?;
    out.writeln("}")?;
    out.blank_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::Verbatim;

    fn render(f: impl FnOnce(&mut Emitter<'_>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        {
            let mut emitter = Emitter::new(&mut buf);
            f(&mut emitter).expect("write failed");
            assert_eq!(emitter.level(), 0);
        }
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_map_writer() {
        let def = MapDef::new().field("x", "int").field("y", "int");
        let out = render(|e| emit_map_writer(e, &Verbatim, "Point", &def));
        let expected = r#"inline YAML::Emitter& operator<<(YAML::Emitter &output, const Point &input) {
  output << YAML::BeginMap;
  output << YAML::Key << "x";
  output << YAML::Value << input.x;
  output << YAML::Key << "y";
  output << YAML::Value << input.y;
  output << YAML::EndMap;
  return output;
}

"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_enum_writer() {
        let def = EnumDef::new(["Red", "Green"]);
        let out = render(|e| emit_enum_writer(e, &Verbatim, "Color", &def));
        let expected = r#"inline YAML::Emitter& operator<<(YAML::Emitter &output, const Color &input) {
  if (input == Red) {
    output << "Red";
  } else if (input == Green) {
    output << "Green";
  }
  return output;
}

"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_enum_writer_uses_choice_identifier_but_writes_token() {
        struct Scoped;
        impl Naming for Scoped {
            fn enum_choice_identifier(&self, choice: &str, owner: &str, _: &EnumDef) -> String {
                format!("{owner}::{choice}")
            }
        }
        let def = EnumDef::new(["Red"]);
        let out = render(|e| emit_enum_writer(e, &Scoped, "Color", &def));
        assert!(out.contains("if (input == Color::Red) {"));
        assert!(out.contains("output << \"Red\";"));
    }

    #[test]
    fn test_empty_enum_writer() {
        let out = render(|e| emit_enum_writer(e, &Verbatim, "Never", &EnumDef::default()));
        assert_eq!(
            out,
            "inline YAML::Emitter& operator<<(YAML::Emitter &output, const Never &input) {\n  return output;\n}\n\n"
        );
    }

    #[test]
    fn test_writer_and_reader_cover_same_fields_in_order() {
        let def = MapDef::new()
            .field("b", "int")
            .field("a", "std::optional<int>")
            .field("c", "double[2]");
        let writer = render(|e| emit_map_writer(e, &Verbatim, "T", &def));
        let reader = render(|e| crate::cpp::readers::emit_map_reader(e, &Verbatim, "T", &def));
        let position = |text: &str, needle: String| text.find(&needle).expect("field present");
        let written: Vec<_> = ["b", "a", "c"]
            .iter()
            .map(|f| position(&writer, format!("YAML::Key << \"{f}\"")))
            .collect();
        let read: Vec<_> = ["b", "a", "c"]
            .iter()
            .map(|f| position(&reader, format!("input[\"{f}\"] >>")))
            .collect();
        assert!(written.windows(2).all(|w| w[0] < w[1]));
        assert!(read.windows(2).all(|w| w[0] < w[1]));
    }
}
