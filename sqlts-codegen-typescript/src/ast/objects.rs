//! Inline TypeScript object types (`{ a: string, b: number }`).

use crate::escape::string_literal;

/// A field of an inline object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: String,
    ty: String,
}

impl Field {
    /// A field whose name is used as a bare identifier.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            key: name.into(),
            ty: ty.into(),
        }
    }

    /// A field whose name is written as a string literal, so any name is allowed.
    pub fn quoted(name: &str, ty: impl Into<String>) -> Self {
        Self {
            key: string_literal(name),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        format!("{}: {}", self.key, self.ty)
    }
}

/// An object type written on one line.
#[derive(Debug, Clone)]
pub struct InlineObject {
    fields: Vec<Field>,
    separator: &'static str,
}

impl InlineObject {
    /// Object type with `; `-separated members, as used for row types.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            separator: "; ",
        }
    }

    /// Use `, ` between members.
    pub fn comma_separated(mut self) -> Self {
        self.separator = ", ";
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Render the type expression. An empty object renders as `{  }`.
    pub fn render(&self) -> String {
        let members = self
            .fields
            .iter()
            .map(Field::render)
            .collect::<Vec<_>>()
            .join(self.separator);
        format!("{{ {} }}", members)
    }
}

impl Default for InlineObject {
    fn default() -> Self {
        Self::new()
    }
}
