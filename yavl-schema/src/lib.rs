//! # YAVL Schema
//!
//! YAVL spec model, loader and meta-schema validation.
//!
//! This crate provides:
//! - YAML spec loading into an ordered, classified type specification
//! - Type model resolution (map/enum/alias, array suffixes, optional markers)
//! - Meta-schema validation of spec documents

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{FieldType, OPTIONAL_PREFIX, TypeKind, classify, is_optional, split_array_suffix};
pub use parser::{load_spec, load_spec_file, parse_spec, parse_spec_value};
pub use types::{AliasDef, CustomCodeGenerator, EnumDef, MapDef, Spec, TypeDef, TypeSpecification};
pub use validation::validate_spec;
