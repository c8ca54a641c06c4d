//! CodeFile abstraction for structured TypeScript file generation.

use sqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A TypeScript module: imports, then body elements.
///
/// The import block and each body element are separated by one blank line.
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("pg").named("ClientBase"))
///     .add(function)
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        for import in &self.imports {
            builder.emit(import);
        }
        for (i, element) in self.body.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                builder.blank();
            }
            builder.fragments(element);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Fn;

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_import_then_body() {
        let file = CodeFile::new()
            .import(Import::new("pg").named("ClientBase"))
            .add(Fn::new("f").body_line("return 1"));
        assert_eq!(
            file.render(),
            "import { ClientBase } from 'pg'\n\nexport function f() {\n  return 1\n}\n"
        );
    }

    #[test]
    fn test_imports_share_a_group() {
        let file = CodeFile::new()
            .import(Import::new("pg").named("ClientBase"))
            .import(Import::new("./types").named("Row"));
        assert_eq!(
            file.render(),
            "import { ClientBase } from 'pg'\nimport { Row } from './types'\n"
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new().add(Fn::new("a")).add(Fn::new("b"));
        assert_eq!(
            file.render(),
            "export function a() {\n}\n\nexport function b() {\n}\n"
        );
    }
}
