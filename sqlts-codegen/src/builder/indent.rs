//! Indentation unit of generated code.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    pub const TYPESCRIPT: Self = Self(2);

    /// Append `depth` levels of indentation to `buf`.
    pub fn write_to(&self, buf: &mut String, depth: usize) {
        buf.extend(std::iter::repeat_n(' ', depth * self.0 as usize));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
