//! TypeScript import builder.

use sqlts_codegen::{CodeFragment, Renderable};

use crate::escape::string_literal;

/// Builder for named imports, written without a trailing semicolon.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// The import statement as a single line, without newline.
    pub fn statement(&self) -> String {
        format!(
            "import {{ {} }} from {}",
            self.named.join(", "),
            string_literal(&self.from)
        )
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("pg").named("ClientBase").statement();
        assert_eq!(i, "import { ClientBase } from 'pg'");
    }

    #[test]
    fn test_multiple_named() {
        let i = Import::new("./utils").named("foo").named("bar").statement();
        assert_eq!(i, "import { foo, bar } from './utils'");
    }

    #[test]
    fn test_module_is_escaped() {
        let i = Import::new("it's").named("X").statement();
        assert_eq!(i, "import { X } from 'it\\'s'");
    }
}
