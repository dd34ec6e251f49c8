//! Spec type definitions.
//!
//! This module contains the data structures representing a YAVL spec
//! document: the ordered type specification and the three kinds of type
//! definitions (maps, enums and aliases).

use crate::ir::{FieldType, TypeKind};
use indexmap::IndexMap;

/// Ordered mapping from type name to its definition.
///
/// Iteration order is declaration order, which is also emission order.
pub type TypeSpecification = IndexMap<String, TypeDef>;

/// Complete YAVL spec document.
#[derive(Debug, Clone, Default)]
pub struct Spec {
    /// Extra `#include` targets, written verbatim after `#include `.
    pub extra_includes: Vec<String>,
    /// Declaration style requested by the spec itself.
    pub custom_code_generator: Option<CustomCodeGenerator>,
    /// Type definitions in declaration order.
    pub types: TypeSpecification,
}

impl Spec {
    /// Creates a new empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition to the spec.
    ///
    /// Returns `false` (and leaves the spec untouched) if a type with the
    /// same name already exists.
    pub fn add_type(&mut self, name: impl Into<String>, type_def: TypeDef) -> bool {
        let name = name.into();
        if self.types.contains_key(&name) {
            return false;
        }
        self.types.insert(name, type_def);
        true
    }

}

/// The `CustomCodeGenerator` entry of a spec: a `[module, class]` pair.
///
/// Only the class part selects anything; the module part is kept so the
/// entry survives a load/inspect cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCodeGenerator {
    /// Module the generator lives in.
    pub module: String,
    /// Generator (declaration style) name.
    pub class: String,
}

/// Type definition variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// Record type with named fields.
    Map(MapDef),
    /// Closed set of named choices.
    Enum(EnumDef),
    /// New name for an existing type.
    Alias(AliasDef),
}

impl TypeDef {
    /// Returns the kind of this definition.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Map(_) => TypeKind::Map,
            Self::Enum(_) => TypeKind::Enum,
            Self::Alias(_) => TypeKind::Alias,
        }
    }
}

/// Map (record) type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapDef {
    /// Field name to field type string, in declaration order.
    pub fields: IndexMap<String, String>,
}

impl MapDef {
    /// Creates an empty map definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style. A repeated name replaces the type in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        self.fields.insert(name.into(), field_type.into());
        self
    }

    /// Returns true if the field must be present on decode, i.e. its type
    /// does not carry the optional marker.
    ///
    /// Unknown fields are reported as not required.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .is_some_and(|t| !FieldType::parse(t).optional)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the map declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDef {
    /// Choices in declaration order.
    pub choices: Vec<String>,
}

impl EnumDef {
    /// Creates an enum definition from its choices.
    #[must_use]
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// Alias type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDef {
    /// Aliased type string, possibly with an array suffix.
    pub target: String,
}

impl AliasDef {
    /// Creates an alias definition.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Returns the parsed target type.
    #[must_use]
    pub fn target_type(&self) -> FieldType<'_> {
        FieldType::parse(&self.target)
    }
}
