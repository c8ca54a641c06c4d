//! TypeScript re-export builder.

use crate::escape::string_literal;

/// A `export { a, b } from './module';` statement.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
}

impl Export {
    /// Re-export from `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
            named: Vec::new(),
        }
    }

    /// Re-export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// The export statement as a single line, without newline.
    pub fn statement(&self) -> String {
        format!(
            "export {{ {} }} from {};",
            self.named.join(", "),
            string_literal(&self.from)
        )
    }
}
