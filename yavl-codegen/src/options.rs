//! Generation options.

/// Toggles controlling which artifacts a generation run emits.
///
/// Everything is enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Emit type declarations.
    pub declarations: bool,
    /// Emit YAML → type decode routines.
    pub readers: bool,
    /// Emit type → YAML encode routines.
    pub writers: bool,
    /// Emit the whole-spec `get_types` / `validate_simple` block.
    pub validator: bool,
    /// Check the spec against its meta-schema before generating.
    pub validate_spec: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            declarations: true,
            readers: true,
            writers: true,
            validator: true,
            validate_spec: true,
        }
    }
}

impl GenerationOptions {
    /// Creates options with every artifact enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether declarations are emitted.
    #[must_use]
    pub fn with_declarations(mut self, enabled: bool) -> Self {
        self.declarations = enabled;
        self
    }

    /// Sets whether readers are emitted.
    #[must_use]
    pub fn with_readers(mut self, enabled: bool) -> Self {
        self.readers = enabled;
        self
    }

    /// Sets whether writers are emitted.
    #[must_use]
    pub fn with_writers(mut self, enabled: bool) -> Self {
        self.writers = enabled;
        self
    }

    /// Sets whether the validator is emitted.
    #[must_use]
    pub fn with_validator(mut self, enabled: bool) -> Self {
        self.validator = enabled;
        self
    }

    /// Sets whether the spec is checked against the meta-schema.
    #[must_use]
    pub fn with_validate_spec(mut self, enabled: bool) -> Self {
        self.validate_spec = enabled;
        self
    }

    /// Returns true if the generated code needs the conversion support header.
    #[must_use]
    pub fn needs_runtime(&self) -> bool {
        self.readers || self.writers || self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let options = GenerationOptions::default();
        assert!(options.declarations);
        assert!(options.readers);
        assert!(options.writers);
        assert!(options.validator);
        assert!(options.validate_spec);
        assert!(options.needs_runtime());
    }

    #[test]
    fn test_declarations_only_needs_no_runtime() {
        let options = GenerationOptions::new()
            .with_readers(false)
            .with_writers(false)
            .with_validator(false);
        assert!(options.declarations);
        assert!(!options.needs_runtime());
    }

    #[test]
    fn test_any_converter_needs_runtime() {
        let base = GenerationOptions::new()
            .with_readers(false)
            .with_writers(false)
            .with_validator(false);
        assert!(base.with_readers(true).needs_runtime());
        assert!(base.with_writers(true).needs_runtime());
        assert!(base.with_validator(true).needs_runtime());
    }
}
