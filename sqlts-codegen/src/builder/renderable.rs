//! Fragments: the layout-free description of a piece of code.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) alone
//! decides indentation and line endings.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line at the current depth.
    Line(String),
    /// Text written verbatim, at column zero and without a trailing newline.
    Raw(String),
    /// `header`, then `body` one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// Fragments one level deeper, without header or close.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// A block closed by `close`, e.g. `"}"`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.to_string(),
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// A node that describes itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
