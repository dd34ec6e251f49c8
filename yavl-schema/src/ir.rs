//! Type model resolution.
//!
//! Classifies raw YAML type definitions into type kinds and picks apart the
//! small amount of syntax a field type string carries: an optional array
//! suffix (`int[4]`) and an optional-marker wrapper (`std::optional<int>`).
//! No other structure of the host-language type is interpreted.

use serde_yaml::Value;
use std::fmt;

/// Prefix marking a field that may be absent on decode.
pub const OPTIONAL_PREFIX: &str = "std::optional<";

/// Type kind enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Record type (YAML mapping).
    Map,
    /// Enumerated choices (YAML sequence).
    Enum,
    /// Alias of another type (YAML scalar).
    Alias,
}

impl TypeKind {
    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Enum => "enum",
            Self::Alias => "alias",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a raw type definition by its shape.
///
/// Mappings are maps, sequences are enums, everything else is an alias.
#[must_use]
pub fn classify(type_info: &Value) -> TypeKind {
    match type_info {
        Value::Mapping(_) => TypeKind::Map,
        Value::Sequence(_) => TypeKind::Enum,
        _ => TypeKind::Alias,
    }
}

/// Splits a type string at its first `[`.
///
/// Returns `(base, suffix)` where the suffix is the remainder verbatim,
/// brackets included. Without a bracket the suffix is empty. Bracket balance
/// is not checked.
#[must_use]
pub fn split_array_suffix(type_string: &str) -> (&str, &str) {
    match type_string.find('[') {
        Some(pos) => type_string.split_at(pos),
        None => (type_string, ""),
    }
}

/// Returns true if the type string carries the optional marker.
#[must_use]
pub fn is_optional(type_string: &str) -> bool {
    type_string.starts_with(OPTIONAL_PREFIX)
}

/// A field type string with its syntax picked apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType<'a> {
    /// Type string before the array suffix.
    pub base: &'a str,
    /// Array suffix including brackets, or empty.
    pub array_suffix: &'a str,
    /// Whether the field may be absent on decode.
    pub optional: bool,
}

impl<'a> FieldType<'a> {
    /// Parses a field type string.
    #[must_use]
    pub fn parse(type_string: &'a str) -> Self {
        let (base, array_suffix) = split_array_suffix(type_string);
        Self {
            base,
            array_suffix,
            optional: is_optional(type_string),
        }
    }

    /// Returns true if every `[` in the suffix is closed in order.
    ///
    /// Generation does not reject unbalanced suffixes; this exists so callers
    /// can report them.
    #[must_use]
    pub fn has_balanced_suffix(&self) -> bool {
        let mut depth: usize = 0;
        for c in self.array_suffix.chars() {
            match c {
                '[' => depth += 1,
                ']' => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).expect("Failed to parse YAML")
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(classify(&yaml("{x: int}")), TypeKind::Map);
        assert_eq!(classify(&yaml("[Red, Green]")), TypeKind::Enum);
        assert_eq!(classify(&yaml("int")), TypeKind::Alias);
        assert_eq!(classify(&yaml("42")), TypeKind::Alias);
        assert_eq!(classify(&yaml("~")), TypeKind::Alias);
    }

    #[test]
    fn test_classify_empty_collections() {
        assert_eq!(classify(&yaml("{}")), TypeKind::Map);
        assert_eq!(classify(&yaml("[]")), TypeKind::Enum);
    }

    #[test]
    fn test_split_array_suffix() {
        assert_eq!(split_array_suffix("int[4]"), ("int", "[4]"));
        assert_eq!(split_array_suffix("double[2][3]"), ("double", "[2][3]"));
        assert_eq!(split_array_suffix("std::string"), ("std::string", ""));
    }

    #[test]
    fn test_split_array_suffix_does_not_check_balance() {
        assert_eq!(split_array_suffix("int[4"), ("int", "[4"));
        assert_eq!(split_array_suffix("int]4["), ("int]4", "["));
    }

    #[test]
    fn test_is_optional() {
        assert!(is_optional("std::optional<int>"));
        assert!(!is_optional("int"));
        assert!(!is_optional(" std::optional<int>"));
        assert!(!is_optional("std::vector<std::optional<int>>"));
    }

    #[test]
    fn test_field_type_parse() {
        let field = FieldType::parse("std::optional<int>");
        assert!(field.optional);
        assert_eq!(field.array_suffix, "");
        assert_eq!(field.base, "std::optional<int>");

        let field = FieldType::parse("char[16]");
        assert!(!field.optional);
        assert_eq!(field.base, "char");
        assert_eq!(field.array_suffix, "[16]");
    }

    #[test]
    fn test_balanced_suffix() {
        assert!(FieldType::parse("int").has_balanced_suffix());
        assert!(FieldType::parse("int[4][2]").has_balanced_suffix());
        assert!(!FieldType::parse("int[4").has_balanced_suffix());
        assert!(!FieldType::parse("int[4]]").has_balanced_suffix());
    }

    #[test]
    fn test_type_kind_display() {
        assert_eq!(TypeKind::Map.to_string(), "map");
        assert_eq!(TypeKind::Enum.to_string(), "enum");
        assert_eq!(TypeKind::Alias.to_string(), "alias");
    }
}
