//! # YAVL Codegen
//!
//! C++ header generation from YAVL specs.
//!
//! This crate provides:
//! - Type declarations (`struct`, `enum`, `typedef`) for every spec type
//! - yaml-cpp readers and writers for map and enum types
//! - A whole-spec validator (`get_types` / `validate_simple`)
//! - Naming and declaration-style hooks for customizing the output
//!
//! ```
//! use yavl_codegen::{GenerationOptions, generate_from_yaml};
//!
//! let yaml = "Types:\n  Color: [Red, Green]\n";
//! let header = generate_from_yaml(yaml, GenerationOptions::default()).unwrap();
//! assert!(header.contains("enum Color {"));
//! ```

pub mod cpp;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod naming;
pub mod options;

pub use cpp::{CTypedefDeclarations, CppDeclarations, DeclarationStyle, style_by_name};
pub use emitter::Emitter;
pub use error::{CodegenError, Result};
pub use generator::Generator;
pub use naming::{Naming, Verbatim};
pub use options::GenerationOptions;

/// Generates a C++ header from a YAVL spec string.
///
/// The spec's `CustomCodeGenerator` entry, if any, selects the declaration
/// style.
///
/// # Arguments
/// * `yaml` - YAVL spec content
/// * `options` - Artifacts to emit
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if loading, validation, or generation fails.
pub fn generate_from_yaml(yaml: &str, options: GenerationOptions) -> Result<String> {
    let spec = yavl_schema::load_spec(yaml, options.validate_spec)?;
    Generator::new(&spec)
        .with_options(options)
        .with_spec_style()?
        .generate()
}

/// Generates a C++ header from a YAVL spec file.
///
/// # Arguments
/// * `path` - Path to the YAVL spec file
/// * `options` - Artifacts to emit
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, or generation fails.
pub fn generate_from_file(path: &std::path::Path, options: GenerationOptions) -> Result<String> {
    let yaml = std::fs::read_to_string(path)?;
    generate_from_yaml(&yaml, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_yaml_validates_spec() {
        let yaml = "Types:\n  Id: int\nTypo: true\n";
        let err = generate_from_yaml(yaml, GenerationOptions::default()).expect_err("should fail");
        assert!(matches!(
            err,
            CodegenError::Schema(yavl_schema::SchemaError::SuperfluousKey { .. })
        ));

        let lenient = GenerationOptions::default().with_validate_spec(false);
        let header = generate_from_yaml(yaml, lenient).expect("generate");
        assert!(header.contains("typedef int Id;"));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("spec.yaml");
        std::fs::write(&path, "Types:\n  Point: {x: int, y: int}\n").expect("write spec");
        let header = generate_from_file(&path, GenerationOptions::default()).expect("generate");
        assert!(header.contains("struct Point {"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = generate_from_file(&dir.path().join("nope.yaml"), GenerationOptions::default())
            .expect_err("should fail");
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
