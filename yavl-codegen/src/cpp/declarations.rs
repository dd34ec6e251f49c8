//! Type declaration generation.
//!
//! Declarations are the part of the output consumers most often want to
//! shape differently, so they sit behind [`DeclarationStyle`]. A style can
//! replace one kind of declaration and inherit the rest.

use crate::emitter::Emitter;
use crate::naming::Naming;
use std::io;
use yavl_schema::{AliasDef, EnumDef, FieldType, MapDef};

/// Strategy for emitting type declarations.
///
/// # Example
///
/// ```
/// use std::io;
/// use yavl_codegen::cpp::{DeclarationStyle, emit_map_members};
/// use yavl_codegen::{Emitter, Naming};
/// use yavl_schema::MapDef;
///
/// /// Declares maps as classes with public members.
/// struct Classes;
///
/// impl DeclarationStyle for Classes {
///     fn name(&self) -> &'static str {
///         "class"
///     }
///
///     fn emit_map_declaration(
///         &self,
///         out: &mut Emitter<'_>,
///         naming: &dyn Naming,
///         type_name: &str,
///         def: &MapDef,
///     ) -> io::Result<()> {
///         let ident = naming.map_type_identifier(type_name);
///         out.writeln(&format!("class {ident} {{"))?;
///         out.writeln("public:")?;
///         emit_map_members(out, naming, type_name, def)?;
///         out.writeln("};")?;
///         out.blank_line()
///     }
/// }
/// ```
pub trait DeclarationStyle {
    /// Short name used on the command line.
    fn name(&self) -> &'static str;

    /// Name a spec's `CustomCodeGenerator` entry refers to this style by.
    fn class_name(&self) -> &'static str {
        self.name()
    }

    /// Emits the declaration of a map type.
    fn emit_map_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &MapDef,
    ) -> io::Result<()> {
        let ident = naming.map_type_identifier(type_name);
        out.writeln(&format!("struct {ident} {{"))?;
        emit_map_members(out, naming, type_name, def)?;
        out.writeln("};")?;
        out.blank_line()
    }

    /// Emits the declaration of an enum type.
    fn emit_enum_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &EnumDef,
    ) -> io::Result<()> {
        let ident = naming.enum_type_identifier(type_name);
        out.writeln(&format!("enum {ident} {{"))?;
        let last = def.choices.len().saturating_sub(1);
        for (i, choice) in def.choices.iter().enumerate() {
            let choice = naming.enum_choice_identifier(choice, type_name, def);
            let separator = if i == last { "" } else { "," };
            out.writeln(&format!("{choice}{separator}"))?;
        }
        out.writeln("};")?;
        out.blank_line()
    }

    /// Emits the declaration of an alias type.
    fn emit_alias_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &AliasDef,
    ) -> io::Result<()> {
        let target = def.target_type();
        warn_unbalanced(type_name, &target);
        out.writeln(&format!(
            "typedef {} {}{};",
            naming.type_identifier(target.base),
            naming.alias_identifier(type_name),
            target.array_suffix
        ))?;
        out.blank_line()
    }
}

impl<T: DeclarationStyle + ?Sized> DeclarationStyle for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn class_name(&self) -> &'static str {
        (**self).class_name()
    }

    fn emit_map_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &MapDef,
    ) -> io::Result<()> {
        (**self).emit_map_declaration(out, naming, type_name, def)
    }

    fn emit_enum_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &EnumDef,
    ) -> io::Result<()> {
        (**self).emit_enum_declaration(out, naming, type_name, def)
    }

    fn emit_alias_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &AliasDef,
    ) -> io::Result<()> {
        (**self).emit_alias_declaration(out, naming, type_name, def)
    }
}

/// Emits one member line per map field, array suffix after the member name.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn emit_map_members(
    out: &mut Emitter<'_>,
    naming: &dyn Naming,
    type_name: &str,
    def: &MapDef,
) -> io::Result<()> {
    for (field_name, field_type) in &def.fields {
        let field_type = FieldType::parse(field_type);
        warn_unbalanced(type_name, &field_type);
        out.writeln(&format!(
            "{} {}{};",
            naming.map_field_type_identifier(field_type.base, type_name, def),
            naming.map_field_identifier(field_name, type_name, def),
            field_type.array_suffix
        ))?;
    }
    Ok(())
}

fn warn_unbalanced(type_name: &str, field_type: &FieldType<'_>) {
    if !field_type.has_balanced_suffix() {
        tracing::warn!(
            type_name,
            suffix = field_type.array_suffix,
            "unbalanced array suffix, emitting verbatim"
        );
    }
}

/// Plain C++ declarations: `struct`, `enum` and `typedef`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppDeclarations;

impl DeclarationStyle for CppDeclarations {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn class_name(&self) -> &'static str {
        "CodeGenerator"
    }
}

/// C-compatible map declarations: `typedef struct T { ... } T;`.
///
/// Enums and aliases are declared as in [`CppDeclarations`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CTypedefDeclarations;

impl DeclarationStyle for CTypedefDeclarations {
    fn name(&self) -> &'static str {
        "c-typedef"
    }

    fn class_name(&self) -> &'static str {
        "CTypedefCodeGenerator"
    }

    fn emit_map_declaration(
        &self,
        out: &mut Emitter<'_>,
        naming: &dyn Naming,
        type_name: &str,
        def: &MapDef,
    ) -> io::Result<()> {
        let tag = naming.map_type_identifier(type_name);
        out.writeln(&format!("typedef struct {tag} {{"))?;
        emit_map_members(out, naming, type_name, def)?;
        let alias = naming.map_type_identifier(type_name);
        out.writeln(&format!("}} {alias};"))?;
        out.blank_line()
    }
}

/// Built-in declaration styles.
const STYLES: &[&dyn DeclarationStyle] = &[&CppDeclarations, &CTypedefDeclarations];

/// Looks up a built-in style by short name or class name.
#[must_use]
pub fn style_by_name(name: &str) -> Option<&'static dyn DeclarationStyle> {
    STYLES
        .iter()
        .copied()
        .find(|s| s.name() == name || s.class_name() == name)
}

/// Short names of all built-in styles.
#[must_use]
pub fn style_names() -> Vec<&'static str> {
    STYLES.iter().map(|s| s.name()).collect()
}
