//! Command-line front end.
//!
//! ```text
//! yavl compile [--no-emit-declarations] [--no-emit-readers] [--no-emit-writers]
//!              [--no-emit-validator] [--no-validate-spec] [--style NAME] SPEC HEADER
//! yavl check SPEC
//! yavl styles
//! ```

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use yavl_codegen::cpp::style_names;
use yavl_codegen::{GenerationOptions, Generator, style_by_name};

/// Output path that selects stdout.
pub const STDOUT_PATH: &str = "-";

/// YAVL header compiler.
#[derive(Debug, Parser)]
#[command(
    name = "yavl",
    version,
    about = "Compile YAVL specs into C++ yaml-cpp headers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a header from a spec.
    Compile(CompileArgs),
    /// Validate a spec against the meta-schema.
    Check {
        /// YAVL spec file
        spec: PathBuf,
    },
    /// List built-in declaration styles.
    Styles,
}

/// Arguments of `yavl compile`.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Skip type declarations
    #[arg(long)]
    pub no_emit_declarations: bool,
    /// Skip YAML readers
    #[arg(long)]
    pub no_emit_readers: bool,
    /// Skip YAML writers
    #[arg(long)]
    pub no_emit_writers: bool,
    /// Skip the whole-spec validator
    #[arg(long)]
    pub no_emit_validator: bool,
    /// Do not check the spec against the meta-schema before generating
    #[arg(long)]
    pub no_validate_spec: bool,
    /// Declaration style, overriding the spec's CustomCodeGenerator
    #[arg(long, value_name = "NAME")]
    pub style: Option<String>,
    /// YAVL spec file
    pub spec: PathBuf,
    /// Output header, or `-` for stdout
    pub header: PathBuf,
}

impl CompileArgs {
    /// Maps the flags onto generation options.
    #[must_use]
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_declarations(!self.no_emit_declarations)
            .with_readers(!self.no_emit_readers)
            .with_writers(!self.no_emit_writers)
            .with_validator(!self.no_emit_validator)
            .with_validate_spec(!self.no_validate_spec)
    }
}

/// Runs a parsed command line, writing user-facing output to `out`.
///
/// # Errors
/// Returns an error if the spec cannot be loaded or validated, the style is
/// unknown, or the header cannot be written.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Compile(args) => compile(args, out),
        Command::Check { spec } => check(spec, out),
        Command::Styles => {
            for name in style_names() {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}

fn compile(args: &CompileArgs, out: &mut dyn Write) -> Result<()> {
    let options = args.options();
    let spec = yavl_schema::load_spec_file(&args.spec, options.validate_spec)
        .with_context(|| format!("failed to load spec {}", args.spec.display()))?;

    let generator = Generator::new(&spec).with_options(options);
    let generator = match &args.style {
        Some(name) => {
            let style = style_by_name(name).ok_or_else(|| {
                anyhow!(
                    "unknown style '{name}' (available: {})",
                    style_names().join(", ")
                )
            })?;
            generator.with_declarations(style)
        }
        None => generator.with_spec_style()?,
    };

    // Render fully before touching the output so a failure leaves no file
    let header = generator
        .generate()
        .with_context(|| format!("failed to generate header for {}", args.spec.display()))?;

    if args.header.as_os_str() == STDOUT_PATH {
        out.write_all(header.as_bytes())?;
    } else {
        std::fs::write(&args.header, &header)
            .with_context(|| format!("failed to write {}", args.header.display()))?;
        tracing::info!(
            spec = %args.spec.display(),
            header = %args.header.display(),
            types = spec.types.len(),
            "header written"
        );
    }
    Ok(())
}

fn check(path: &Path, out: &mut dyn Write) -> Result<()> {
    yavl_schema::load_spec_file(path, true)
        .with_context(|| format!("validation of {} failed", path.display()))?;
    writeln!(out, "Validation successful!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = "Types:\n  Color: [Red, Green]\n  Point: {x: int, y: int}\n";

    fn run_args(args: &[&str]) -> (Result<()>, String) {
        let cli = Cli::try_parse_from(args).expect("parse args");
        let mut buf = Vec::new();
        let result = run(&cli, &mut buf);
        (result, String::from_utf8(buf).expect("utf8"))
    }

    fn write_spec(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("spec.yaml");
        std::fs::write(&path, content).expect("write spec");
        path
    }

    #[test]
    fn test_compile_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), SPEC);
        let header = dir.path().join("out.h");
        let (result, stdout) = run_args(&[
            "yavl",
            "compile",
            spec.to_str().expect("path"),
            header.to_str().expect("path"),
        ]);
        result.expect("compile");
        assert!(stdout.is_empty());
        let text = std::fs::read_to_string(&header).expect("read header");
        assert!(text.starts_with("#pragma once\n"));
        assert!(text.contains("struct Point {"));
        assert!(text.contains("validate_simple"));
    }

    #[test]
    fn test_compile_to_stdout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), SPEC);
        let (result, stdout) = run_args(&["yavl", "compile", spec.to_str().expect("path"), "-"]);
        result.expect("compile");
        assert!(stdout.contains("enum Color {"));
    }

    #[test]
    fn test_compile_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "yavl",
            "compile",
            "--no-emit-readers",
            "--no-emit-validator",
            "--no-validate-spec",
            "spec.yaml",
            "-",
        ])
        .expect("parse args");
        let Command::Compile(args) = cli.command else {
            panic!("expected compile");
        };
        let options = args.options();
        assert!(options.declarations);
        assert!(!options.readers);
        assert!(options.writers);
        assert!(!options.validator);
        assert!(!options.validate_spec);
    }

    #[test]
    fn test_compile_declarations_only_has_no_runtime_include() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), SPEC);
        let (result, stdout) = run_args(&[
            "yavl",
            "compile",
            "--no-emit-readers",
            "--no-emit-writers",
            "--no-emit-validator",
            spec.to_str().expect("path"),
            "-",
        ]);
        result.expect("compile");
        assert!(!stdout.contains("yavl-cpp/convert.h"));
        assert!(!stdout.contains("operator"));
    }

    #[test]
    fn test_compile_with_style() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), SPEC);
        let (result, stdout) = run_args(&[
            "yavl",
            "compile",
            "--style",
            "c-typedef",
            spec.to_str().expect("path"),
            "-",
        ]);
        result.expect("compile");
        assert!(stdout.contains("typedef struct Point {"));
        assert!(stdout.contains("} Point;"));
    }

    #[test]
    fn test_compile_unknown_style() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), SPEC);
        let (result, _) = run_args(&[
            "yavl",
            "compile",
            "--style",
            "nope",
            spec.to_str().expect("path"),
            "-",
        ]);
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("unknown style 'nope'"));
    }

    #[test]
    fn test_compile_failure_writes_no_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), "Types:\n  Id: int\nBogus: 1\n");
        let header = dir.path().join("out.h");
        let (result, _) = run_args(&[
            "yavl",
            "compile",
            spec.to_str().expect("path"),
            header.to_str().expect("path"),
        ]);
        assert!(result.is_err());
        assert!(!header.exists());
    }

    #[test]
    fn test_check_valid_spec() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), SPEC);
        let (result, stdout) = run_args(&["yavl", "check", spec.to_str().expect("path")]);
        result.expect("check");
        assert_eq!(stdout, "Validation successful!\n");
    }

    #[test]
    fn test_check_invalid_spec() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec = write_spec(dir.path(), "ExtraIncludes: [\"<string>\"]\n");
        let (result, stdout) = run_args(&["yavl", "check", spec.to_str().expect("path")]);
        let err = result.expect_err("should fail");
        assert!(format!("{err:#}").contains("Types"));
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_styles_lists_builtins() {
        let (result, stdout) = run_args(&["yavl", "styles"]);
        result.expect("styles");
        assert_eq!(stdout, "cpp\nc-typedef\n");
    }

    #[test]
    fn test_missing_header_argument_is_rejected() {
        assert!(Cli::try_parse_from(["yavl", "compile", "spec.yaml"]).is_err());
    }
}
