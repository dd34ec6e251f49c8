//! Header generation driver.
//!
//! [`Generator`] walks a [`Spec`] once, in declaration order, and writes a
//! single C++ header: preamble, then declaration/reader/writer for each type,
//! then the whole-spec validator. A generator holds no mutable state; every
//! call to [`Generator::emit_header`] starts from a fresh [`Emitter`].

use crate::cpp::{
    CppDeclarations, DeclarationStyle, RUNTIME_INCLUDE, emit_enum_reader, emit_enum_writer,
    emit_map_reader, emit_map_writer, emit_validator, style_by_name,
};
use crate::emitter::Emitter;
use crate::error::{CodegenError, Result};
use crate::naming::{Naming, Verbatim};
use crate::options::GenerationOptions;
use std::io::{self, Write};
use yavl_schema::{Spec, TypeDef};

/// Generates a C++ header from a spec.
pub struct Generator<'a> {
    spec: &'a Spec,
    options: GenerationOptions,
    naming: Box<dyn Naming + 'a>,
    declarations: Box<dyn DeclarationStyle + 'a>,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options, verbatim naming and plain
    /// C++ declarations.
    #[must_use]
    pub fn new(spec: &'a Spec) -> Self {
        Self {
            spec,
            options: GenerationOptions::default(),
            naming: Box::new(Verbatim),
            declarations: Box::new(CppDeclarations),
        }
    }

    /// Sets the generation options.
    #[must_use]
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the naming policy.
    #[must_use]
    pub fn with_naming(mut self, naming: impl Naming + 'a) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// Replaces the declaration style.
    #[must_use]
    pub fn with_declarations(mut self, style: impl DeclarationStyle + 'a) -> Self {
        self.declarations = Box::new(style);
        self
    }

    /// Applies the declaration style named by the spec's
    /// `CustomCodeGenerator` entry, if it has one.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownStyle` if no built-in style has that name.
    pub fn with_spec_style(self) -> Result<Self> {
        match &self.spec.custom_code_generator {
            Some(custom) => {
                let style = style_by_name(&custom.class)
                    .ok_or_else(|| CodegenError::unknown_style(&custom.class))?;
                Ok(self.with_declarations(style))
            }
            None => Ok(self),
        }
    }

    /// Returns the generation options.
    #[must_use]
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Returns the active declaration style.
    #[must_use]
    pub fn declaration_style(&self) -> &dyn DeclarationStyle {
        &*self.declarations
    }

    /// Generates the header into a string.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation fails.
    pub fn generate(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.emit_header(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| CodegenError::generation(format!("generated header is not UTF-8: {e}")))
    }

    /// Writes the complete header to `sink`.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the sink fails.
    pub fn emit_header(&self, sink: &mut dyn Write) -> Result<()> {
        let mut out = Emitter::new(sink);
        self.emit_includes(&mut out)?;
        for (type_name, def) in &self.spec.types {
            self.emit_type(&mut out, type_name, def)?;
        }
        if self.options.validator {
            emit_validator(&mut out, &*self.naming, &self.spec.types)?;
        }
        if out.level() != 0 {
            tracing::warn!(level = out.level(), "header ended inside an open block");
        }
        tracing::debug!(types = self.spec.types.len(), "header generated");
        Ok(())
    }

    /// Writes the preamble: include guard, support header, extra includes.
    fn emit_includes(&self, out: &mut Emitter<'_>) -> io::Result<()> {
        out.writeln("#pragma once")?;
        out.blank_line()?;
        if self.options.needs_runtime() {
            out.writeln(&format!("#include {RUNTIME_INCLUDE}"))?;
            out.blank_line()?;
        }
        for header in &self.spec.extra_includes {
            out.writeln(&format!("#include {header}"))?;
        }
        out.blank_line()
    }

    /// Writes the enabled artifacts for one type: declaration, reader, writer.
    fn emit_type(&self, out: &mut Emitter<'_>, type_name: &str, def: &TypeDef) -> io::Result<()> {
        tracing::debug!(type_name, kind = %def.kind(), "emitting type");
        let naming = &*self.naming;
        let options = &self.options;
        match def {
            TypeDef::Map(map) => {
                if options.declarations {
                    self.declarations
                        .emit_map_declaration(out, naming, type_name, map)?;
                }
                if options.readers {
                    emit_map_reader(out, naming, type_name, map)?;
                }
                if options.writers {
                    emit_map_writer(out, naming, type_name, map)?;
                }
            }
            TypeDef::Enum(choices) => {
                if options.declarations {
                    self.declarations
                        .emit_enum_declaration(out, naming, type_name, choices)?;
                }
                if options.readers {
                    emit_enum_reader(out, naming, type_name, choices)?;
                }
                if options.writers {
                    emit_enum_writer(out, naming, type_name, choices)?;
                }
            }
            TypeDef::Alias(alias) => {
                if options.declarations {
                    self.declarations
                        .emit_alias_declaration(out, naming, type_name, alias)?;
                }
            }
        }
        Ok(())
    }
}
