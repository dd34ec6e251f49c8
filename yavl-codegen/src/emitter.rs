//! Indentation-tracking text emitter.
//!
//! The emitter infers nesting from the text it writes: a fragment with more
//! `{` than `}` indents everything after it, a fragment with more `}` than
//! `{` de-indents itself. Callers emit logical lines and never handle
//! whitespace.
//!
//! This is a character count, not a parser. A brace inside a string literal
//! counts the same as a real block delimiter, so emitted literals must not
//! contain unbalanced braces.

use std::io::{self, Write};

/// Character that opens a block.
pub const OPEN_MARKER: char = '{';
/// Character that closes a block.
pub const CLOSE_MARKER: char = '}';
/// Spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Writes text to a sink while tracking block indentation.
pub struct Emitter<'w> {
    sink: &'w mut dyn Write,
    level: usize,
    width: usize,
}

impl<'w> Emitter<'w> {
    /// Creates an emitter at level zero.
    pub fn new(sink: &'w mut dyn Write) -> Self {
        Self {
            sink,
            level: 0,
            width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Sets the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Current indentation level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Increases the indentation level.
    pub fn indent(&mut self, levels: usize) {
        self.level += levels;
    }

    /// Decreases the indentation level, stopping at zero.
    pub fn unindent(&mut self, levels: usize) {
        self.level = self.level.saturating_sub(levels);
    }

    /// Writes indented text, adjusting the level from its markers.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.write_with(text, true, true)
    }

    /// Writes indented text followed by a newline.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.writeln_with(text, true, true)
    }

    /// Writes text without leading indentation, continuing the current line.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn write_inline(&mut self, text: &str) -> io::Result<()> {
        self.write_with(text, false, true)
    }

    /// Writes text and a newline without leading indentation.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn writeln_inline(&mut self, text: &str) -> io::Result<()> {
        self.writeln_with(text, false, true)
    }

    /// Writes an empty line.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn blank_line(&mut self) -> io::Result<()> {
        self.writeln("")
    }

    /// Appends a newline to `text` and writes it with [`Emitter::write_with`].
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn writeln_with(&mut self, text: &str, indent: bool, auto_indent: bool) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.write_with(&line, indent, auto_indent)
    }

    /// Writes a fragment.
    ///
    /// With `auto_indent`, the difference between opening and closing markers
    /// in `text` moves the level: a negative difference is applied before the
    /// text is written, a positive one after. With `indent`, the text is
    /// prefixed by `level * width` spaces.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn write_with(&mut self, text: &str, indent: bool, auto_indent: bool) -> io::Result<()> {
        let delta = if auto_indent { marker_delta(text) } else { 0 };
        if delta < 0 {
            self.unindent(delta.unsigned_abs());
        }
        if indent {
            let padding = self.level * self.width;
            write!(self.sink, "{:padding$}", "")?;
        }
        self.sink.write_all(text.as_bytes())?;
        if delta > 0 {
            self.indent(delta.unsigned_abs());
        }
        Ok(())
    }
}

/// Number of opening markers minus number of closing markers.
fn marker_delta(text: &str) -> isize {
    text.chars().fold(0, |acc, c| match c {
        OPEN_MARKER => acc + 1,
        CLOSE_MARKER => acc - 1,
        _ => acc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Emitter<'_>) -> io::Result<()>) -> (String, usize) {
        let mut buf = Vec::new();
        let level = {
            let mut emitter = Emitter::new(&mut buf);
            f(&mut emitter).expect("write failed");
            emitter.level()
        };
        (String::from_utf8(buf).expect("utf8"), level)
    }

    #[test]
    fn test_marker_delta() {
        assert_eq!(marker_delta("struct A {"), 1);
        assert_eq!(marker_delta("};"), -1);
        assert_eq!(marker_delta("{\"x\", true},"), 0);
        assert_eq!(marker_delta("} else {"), 0);
        assert_eq!(marker_delta("plain"), 0);
    }

    #[test]
    fn test_block_indents_body() {
        let (out, level) = render(|e| {
            e.writeln("struct Point {")?;
            e.writeln("int x;")?;
            e.writeln("};")
        });
        assert_eq!(out, "struct Point {\n  int x;\n};\n");
        assert_eq!(level, 0);
    }

    #[test]
    fn test_nested_blocks_return_to_start() {
        let (out, level) = render(|e| {
            e.writeln("a {")?;
            e.writeln("b {")?;
            e.writeln("c;")?;
            e.writeln("}")?;
            e.writeln("}")
        });
        assert_eq!(out, "a {\n  b {\n    c;\n  }\n}\n");
        assert_eq!(level, 0);
    }

    #[test]
    fn test_else_chain() {
        let (out, level) = render(|e| {
            e.writeln("f {")?;
            e.writeln("if (a) {")?;
            e.writeln("x;")?;
            e.write("}")?;
            e.write_inline(" else ")?;
            e.writeln_inline("{")?;
            e.writeln("y;")?;
            e.writeln("}")?;
            e.writeln("}")
        });
        assert_eq!(out, "f {\n  if (a) {\n    x;\n  } else {\n    y;\n  }\n}\n");
        assert_eq!(level, 0);
    }

    #[test]
    fn test_level_never_negative() {
        let (out, level) = render(|e| {
            e.writeln("}")?;
            e.writeln("}}")?;
            e.writeln("x")
        });
        assert_eq!(out, "}\n}}\nx\n");
        assert_eq!(level, 0);
    }

    #[test]
    fn test_unbalanced_open_leaves_level_raised() {
        let (_, level) = render(|e| e.writeln("{ {"));
        assert_eq!(level, 2);
    }

    #[test]
    fn test_auto_indent_disabled() {
        let (out, level) = render(|e| {
            e.writeln_with("{", true, false)?;
            e.writeln("x")
        });
        assert_eq!(out, "{\nx\n");
        assert_eq!(level, 0);
    }

    #[test]
    fn test_manual_indent_and_clamp() {
        let (out, level) = render(|e| {
            e.indent(2);
            e.writeln("deep")?;
            e.unindent(5);
            e.writeln("flat")
        });
        assert_eq!(out, "    deep\nflat\n");
        assert_eq!(level, 0);
    }

    #[test]
    fn test_custom_width() {
        let mut buf = Vec::new();
        {
            let mut e = Emitter::new(&mut buf).with_indent_width(4);
            e.writeln("a {").expect("write");
            e.writeln("b;").expect("write");
            e.writeln("}").expect("write");
        }
        assert_eq!(String::from_utf8(buf).expect("utf8"), "a {\n    b;\n}\n");
    }

    #[test]
    fn test_braces_in_literals_are_counted() {
        let (out, level) = render(|e| {
            e.writeln("s = \"{\";")?;
            e.writeln("x;")
        });
        assert_eq!(out, "s = \"{\";\n  x;\n");
        assert_eq!(level, 1);
    }
}
