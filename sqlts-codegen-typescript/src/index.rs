//! Barrel module generation.

use sqlts_core::file_stem;
use sqlts_ir::TsModule;

use crate::ast::Export;

/// Re-export every generated function, one line per module, in input order.
///
/// Duplicate function names or colliding file names are passed through.
pub fn generate_index(modules: &[TsModule]) -> String {
    modules
        .iter()
        .map(|module| {
            Export::new(format!("./{}", file_stem(&module.ts_file_name)))
                .named(&module.func_name)
                .statement()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
