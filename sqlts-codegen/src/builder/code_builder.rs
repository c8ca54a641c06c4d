//! Indentation-aware text buffer.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines of code at a tracked depth.
///
/// ```
/// use sqlts_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .line("function one() {")
///     .indented(|b| {
///         b.line("return 1;");
///     })
///     .line("}");
/// assert_eq!(builder.build(), "function one() {\n  return 1;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
    indent: Indent,
    depth: usize,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            indent,
            depth: 0,
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Write `s` at the current depth, followed by a newline.
    ///
    /// An empty line gets no indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.indent.write_to(&mut self.buffer, self.depth);
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Write `s` exactly as given.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Run `f` one level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        self.fragments(&node.to_fragments())
    }

    fn fragment(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => self.line(s),
            CodeFragment::Raw(s) => self.raw(s),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(header)
                    .indented(|b| {
                        b.fragments(body);
                    })
                    .line(close)
            }
            CodeFragment::Indent(body) => self.indented(|b| {
                b.fragments(body);
            }),
        }
    }

    pub fn fragments(&mut self, fragments: &[CodeFragment]) -> &mut Self {
        for fragment in fragments {
            self.fragment(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blanks() {
        let mut builder = CodeBuilder::typescript();
        builder.line("import 'x';").blank().line("run();");
        assert_eq!(builder.build(), "import 'x';\n\nrun();\n");
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let mut builder = CodeBuilder::typescript();
        builder.indented(|b| {
            b.line("a").line("").line("b");
        });
        assert_eq!(builder.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_nested_indented() {
        let mut builder = CodeBuilder::typescript();
        builder
            .indented(|b| {
                b.indented(|b| {
                    b.line("deep");
                });
                b.line("shallow");
            })
            .line("top");
        assert_eq!(builder.build(), "    deep\n  shallow\ntop\n");
    }

    #[test]
    fn test_raw_ignores_depth() {
        let mut builder = CodeBuilder::typescript();
        builder.indented(|b| {
            b.line("const q = `\\").raw("SELECT 1`;\n");
        });
        assert_eq!(builder.build(), "  const q = `\\\nSELECT 1`;\n");
    }

    #[test]
    fn test_block_and_indent_fragments() {
        struct Call;
        impl Renderable for Call {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "function main() {",
                    vec![
                        CodeFragment::line("f("),
                        CodeFragment::indent(vec![CodeFragment::line("a, b")]),
                        CodeFragment::line(");"),
                    ],
                    "}",
                )]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Call);
        assert_eq!(builder.build(), "function main() {\n  f(\n    a, b\n  );\n}\n");
    }
}
