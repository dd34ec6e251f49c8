//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use yavl::prelude::*;
//! ```

// Spec types
pub use yavl_schema::{
    AliasDef, EnumDef, MapDef, ParseError, SchemaError, Spec, TypeDef, TypeKind, load_spec,
    load_spec_file, parse_spec, validate_spec,
};

// Generation
pub use yavl_codegen::{
    CTypedefDeclarations, CodegenError, CppDeclarations, DeclarationStyle, Emitter,
    GenerationOptions, Generator, Naming, Verbatim, style_by_name,
};
