//! Identifier resolution.
//!
//! [`Naming`] maps schema names to the identifiers written into generated
//! code. Every hook has a default, and the defaults chain so that
//! overriding [`Naming::identifier`] alone renames everything:
//!
//! ```text
//! identifier
//! ├── type_identifier
//! │   ├── map_type_identifier
//! │   ├── enum_type_identifier
//! │   ├── alias_identifier
//! │   └── map_field_type_identifier
//! └── name_identifier
//!     ├── map_field_identifier
//!     └── enum_choice_identifier
//! ```
//!
//! Hooks are pure and must return identifiers that are valid in the target
//! language. Nothing downstream sanitizes them. YAML keys and enum tokens in
//! the generated code keep the schema spelling; only host-language names go
//! through this trait.

use yavl_schema::{EnumDef, MapDef};

/// Naming hooks used by the emission strategies.
///
/// # Example
///
/// ```
/// use yavl_codegen::Naming;
/// use yavl_schema::MapDef;
///
/// /// Prefixes every member with `m_`.
/// struct MemberPrefix;
///
/// impl Naming for MemberPrefix {
///     fn map_field_identifier(&self, field_name: &str, _: &str, _: &MapDef) -> String {
///         format!("m_{field_name}")
///     }
/// }
///
/// let def = MapDef::new().field("x", "int");
/// assert_eq!(MemberPrefix.map_field_identifier("x", "Point", &def), "m_x");
/// assert_eq!(MemberPrefix.map_type_identifier("Point"), "Point");
/// ```
pub trait Naming {
    /// Base transform every other hook falls back to.
    fn identifier(&self, name: &str) -> String {
        name.to_string()
    }

    /// Names of types.
    fn type_identifier(&self, name: &str) -> String {
        self.identifier(name)
    }

    /// Names of members and enumerators.
    fn name_identifier(&self, name: &str) -> String {
        self.identifier(name)
    }

    /// Name of a map (struct) type.
    fn map_type_identifier(&self, name: &str) -> String {
        self.type_identifier(name)
    }

    /// Name of an enum type.
    fn enum_type_identifier(&self, name: &str) -> String {
        self.type_identifier(name)
    }

    /// Name of an alias type.
    fn alias_identifier(&self, name: &str) -> String {
        self.type_identifier(name)
    }

    /// Base type of a map field, array suffix already removed.
    fn map_field_type_identifier(
        &self,
        field_type: &str,
        _owner_name: &str,
        _owner_def: &MapDef,
    ) -> String {
        self.type_identifier(field_type)
    }

    /// Member name of a map field.
    fn map_field_identifier(
        &self,
        field_name: &str,
        _owner_name: &str,
        _owner_def: &MapDef,
    ) -> String {
        self.name_identifier(field_name)
    }

    /// Enumerator name of an enum choice.
    fn enum_choice_identifier(
        &self,
        choice: &str,
        _owner_name: &str,
        _owner_def: &EnumDef,
    ) -> String {
        self.name_identifier(choice)
    }
}

/// Reproduces schema names unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Naming for Verbatim {}
