//! C++ (yaml-cpp) code generation modules.

pub mod declarations;
pub mod readers;
pub mod validator;
pub mod writers;

pub use declarations::{
    CTypedefDeclarations, CppDeclarations, DeclarationStyle, emit_map_members, style_by_name,
    style_names,
};
pub use readers::{emit_enum_reader, emit_map_reader};
pub use validator::emit_validator;
pub use writers::{emit_enum_writer, emit_map_writer};

use crate::naming::Naming;
use yavl_schema::TypeDef;

/// Header providing the conversion operators generated code builds on.
pub const RUNTIME_INCLUDE: &str = "\"yavl-cpp/convert.h\"";

/// Resolves a type's emitted name through the hook matching its kind.
#[must_use]
pub fn resolved_type_name(naming: &dyn Naming, type_name: &str, def: &TypeDef) -> String {
    match def {
        TypeDef::Map(_) => naming.map_type_identifier(type_name),
        TypeDef::Enum(_) => naming.enum_type_identifier(type_name),
        TypeDef::Alias(_) => naming.alias_identifier(type_name),
    }
}
