//! # YAVL
//!
//! Generate type-safe C++ YAML bindings from declarative YAVL specs.
//!
//! A spec lists named types in YAML:
//!
//! ```yaml
//! Types:
//!   Color: [Red, Green, Blue]        # enum
//!   Point: {x: int, y: int}          # struct
//!   Samples: "int[4]"                # alias
//! ```
//!
//! From it, YAVL writes a single header with the type declarations,
//! yaml-cpp readers and writers, and a runtime validator that decodes a node
//! as a type chosen by name.
//!
//! ## Quick Start
//!
//! ```
//! use yavl::prelude::*;
//!
//! let spec = parse_spec("Types:\n  Point: {x: int, y: int}\n").unwrap();
//! let header = Generator::new(&spec).generate().unwrap();
//! assert!(header.contains("struct Point {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Spec model, loading and meta-schema validation
//! - [`codegen`] - Header generation, naming and declaration hooks
//! - [`cli`] - The `yavl` command-line front end

pub mod cli;
pub mod prelude;

/// Spec model, loading and validation.
pub mod schema {
    pub use yavl_schema::*;
}

/// Header generation.
pub mod codegen {
    pub use yavl_codegen::*;
}

// Re-export commonly used items at the crate root
pub use yavl_codegen::{
    CodegenError, DeclarationStyle, GenerationOptions, Generator, Naming, generate_from_file,
    generate_from_yaml,
};
pub use yavl_schema::{Spec, TypeDef, load_spec, load_spec_file, parse_spec};
