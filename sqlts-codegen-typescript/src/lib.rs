//! TypeScript code generator for sqlts.
//!
//! Generates one `async` wrapper function per SQL statement, targeting the
//! [`pg`](https://www.npmjs.com/package/pg) driver's `ClientBase`, plus an
//! `index.ts` re-exporting every function of a directory.
//!
//! # Usage
//!
//! ```ignore
//! use sqlts_codegen_typescript::{PgTypeResolver, generate_function, generate_index};
//!
//! let resolver = PgTypeResolver::new();
//! let code = generate_function(&resolver, "pg", "getUser", &stmt).await?;
//! ```
//!
//! # Generated Output
//!
//! ```ts
//! import { ClientBase } from 'pg'
//!
//! export async function getUser(
//!   client: ClientBase, $1: number
//! ): Promise<{ 'id': number } | null> {
//!     const result = await client.query(`\
//! SELECT id FROM users WHERE id = $1`, [ $1 ])
//!     return result.rows.length ? result.rows[0] : null
//! }
//! ```

mod code_file;
mod escape;
mod generator;
mod index;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use escape::{string_literal, template_literal_body};
pub use generator::{CLIENT_TYPE, generate_function, generate_statement};
pub use index::generate_index;
pub use naming::{function_name, is_reserved};
pub use type_mapper::PgTypeResolver;
