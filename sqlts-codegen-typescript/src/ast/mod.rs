//! TypeScript AST builders for the generated query modules.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod exports;
mod fns;
mod imports;
mod objects;

pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use objects::{Field, InlineObject};
