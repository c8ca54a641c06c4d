//! Discovery and loading of statement sources.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use sqlts_ir::StatementDescription;
use tracing::warn;

/// A `<stem>.sql` file and its `<stem>.json` description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlSource {
    pub sql_path: PathBuf,
    pub json_path: PathBuf,
    pub stem: String,
}

impl SqlSource {
    /// Read both files into a statement.
    ///
    /// The query text comes from the `.sql` file, trailing whitespace removed.
    /// A `sql` key in the description is ignored.
    pub fn load(&self) -> Result<StatementDescription> {
        let sql = fs::read_to_string(&self.sql_path)
            .wrap_err_with(|| format!("failed to read '{}'", self.sql_path.display()))?;
        let json = fs::read_to_string(&self.json_path)
            .wrap_err_with(|| format!("failed to read '{}'", self.json_path.display()))?;

        let stmt: StatementDescription = serde_json::from_str(&json).wrap_err_with(|| {
            format!(
                "invalid statement description '{}'",
                self.json_path.display()
            )
        })?;
        Ok(stmt.with_sql(sql.trim_end()))
    }
}

/// Find every `.sql` file in `dir` that has a sibling `.json`, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<SqlSource>> {
    let entries =
        fs::read_dir(dir).wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let sql_path = entry
            .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?
            .path();
        if !sql_path.is_file() || sql_path.extension().is_none_or(|ext| ext != "sql") {
            continue;
        }

        let Some(stem) = sql_path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %sql_path.display(), "skipping file with a non UTF-8 name");
            continue;
        };
        let stem = stem.to_string();

        let json_path = sql_path.with_extension("json");
        if !json_path.is_file() {
            warn!(path = %sql_path.display(), "no statement description, skipping");
            continue;
        }

        sources.push(SqlSource {
            sql_path,
            json_path,
            stem,
        });
    }

    sources.sort_by(|a, b| a.sql_path.file_name().cmp(&b.sql_path.file_name()));
    Ok(sources)
}
