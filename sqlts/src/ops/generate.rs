//! Generate operation: statements of a directory to TypeScript files.

use std::path::{Path, PathBuf};

use eyre::Result;
use futures::future::join_all;
use sqlts_codegen::TypeResolver;
use sqlts_codegen_typescript::{
    function_name, generate_statement,
    files::{IndexTs, QueryTs},
};
use sqlts_config::Config;
use sqlts_core::GeneratedFile;
use sqlts_ir::{TsModule, TsModuleDir};
use tracing::{info, warn};

use super::load::{self, SqlSource};

/// Options for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Module the `ClientBase` type is imported from.
    pub module: String,
    /// Whether to produce `index.ts`.
    pub index: bool,
}

impl From<&Config> for GenerateOptions {
    fn from(config: &Config) -> Self {
        Self {
            module: config.generate.module.clone(),
            index: config.generate.index,
        }
    }
}

/// A statement that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub path: PathBuf,
    pub message: String,
}

/// Everything generated for one directory. Nothing is written yet.
pub struct DirOutput {
    pub dir: PathBuf,
    pub modules: TsModuleDir,
    pub queries: Vec<QueryTs>,
    pub index: Option<IndexTs>,
    pub failures: Vec<Failure>,
}

impl DirOutput {
    /// Query files first, then the index.
    pub fn files(&self) -> impl Iterator<Item = &dyn GeneratedFile> {
        self.queries
            .iter()
            .map(|q| q as &dyn GeneratedFile)
            .chain(self.index.iter().map(|i| i as &dyn GeneratedFile))
    }
}

/// Generate every statement in `dir` concurrently.
///
/// A statement that fails to load, validate or resolve is recorded in
/// [`DirOutput::failures`] and left out of the index. Only a directory that
/// cannot be read fails the whole operation.
pub async fn generate_dir<R>(dir: &Path, resolver: &R, opts: &GenerateOptions) -> Result<DirOutput>
where
    R: TypeResolver + ?Sized,
{
    let sources = load::discover(dir)?;
    info!(dir = %dir.display(), statements = sources.len(), "generating");

    let results = join_all(
        sources
            .iter()
            .map(|source| generate_source(source, resolver, &opts.module)),
    )
    .await;

    let mut modules = TsModuleDir::new(dir);
    let mut queries = Vec::new();
    let mut failures = Vec::new();
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok((module, query)) => {
                modules.push(module);
                queries.push(query);
            }
            Err(err) => {
                let message = format!("{:#}", err);
                warn!(path = %source.sql_path.display(), "{}", message);
                failures.push(Failure {
                    path: source.sql_path.clone(),
                    message,
                });
            }
        }
    }

    let index = (opts.index && !modules.is_empty()).then(|| IndexTs::new(modules.modules.clone()));

    Ok(DirOutput {
        dir: dir.to_path_buf(),
        modules,
        queries,
        index,
        failures,
    })
}

async fn generate_source<R>(
    source: &SqlSource,
    resolver: &R,
    module: &str,
) -> Result<(TsModule, QueryTs)>
where
    R: TypeResolver + ?Sized,
{
    let stmt = source.load()?;
    let func_name = function_name(&source.stem);
    let content = generate_statement(resolver, module, &func_name, &stmt).await?;

    let query = QueryTs::new(&source.stem, content);
    let ts_module = TsModule::new(
        source.sql_path.display().to_string(),
        query.file_name(),
        func_name,
    );
    Ok((ts_module, query))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sqlts_codegen_typescript::PgTypeResolver;
    use sqlts_core::FileStatus;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn options() -> GenerateOptions {
        GenerateOptions::from(&Config::default())
    }

    /// A directory with two good statements and one with duplicate columns.
    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "get_user.sql", "SELECT id FROM users WHERE id = $1\n");
        write(
            temp.path(),
            "get_user.json",
            r#"{
                "params": [{ "name": "$1", "type": "int4" }],
                "columns": [{ "name": "id", "type": "int4" }],
                "rowCount": "zeroOrOne"
            }"#,
        );
        write(temp.path(), "delete.sql", "DELETE FROM users");
        write(temp.path(), "delete.json", r#"{ "rowCount": "zero" }"#);
        write(temp.path(), "dupes.sql", "SELECT 1 AS a, 2 AS a");
        write(
            temp.path(),
            "dupes.json",
            r#"{
                "columns": [{ "name": "a", "type": "int4" }, { "name": "a", "type": "int4" }],
                "rowCount": "one"
            }"#,
        );
        temp
    }

    #[tokio::test]
    async fn test_generate_dir_skips_failures() {
        let temp = fixture();
        let output = generate_dir(temp.path(), &PgTypeResolver::new(), &options())
            .await
            .unwrap();

        let names: Vec<_> = output.queries.iter().map(|q| q.file_name()).collect();
        assert_eq!(names, vec!["delete.ts", "get_user.ts"]);

        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].path, temp.path().join("dupes.sql"));
        assert_eq!(output.failures[0].message, "Duplicate output columns: a");

        let funcs: Vec<_> = output
            .modules
            .modules
            .iter()
            .map(|m| m.func_name.as_str())
            .collect();
        assert_eq!(funcs, vec!["_delete", "getUser"]);

        let index = output.index.as_ref().unwrap();
        assert_eq!(
            index.render(),
            "export { _delete } from './delete';\nexport { getUser } from './get_user';\n"
        );
    }

    #[tokio::test]
    async fn test_generate_dir_without_index() {
        let temp = fixture();
        let opts = GenerateOptions {
            index: false,
            ..options()
        };
        let output = generate_dir(temp.path(), &PgTypeResolver::new(), &opts)
            .await
            .unwrap();

        assert!(output.index.is_none());
        assert_eq!(output.files().count(), 2);
    }

    #[tokio::test]
    async fn test_written_files_are_up_to_date() {
        let temp = fixture();
        let output = generate_dir(temp.path(), &PgTypeResolver::new(), &options())
            .await
            .unwrap();

        for file in output.files() {
            assert_eq!(file.status(&output.dir).unwrap(), FileStatus::Missing);
            file.write(&output.dir).unwrap();
            assert_eq!(file.status(&output.dir).unwrap(), FileStatus::UpToDate);
        }

        let content = fs::read_to_string(temp.path().join("get_user.ts")).unwrap();
        assert!(content.starts_with("import { ClientBase } from 'pg'\n"));
        assert!(content.contains("export async function getUser("));
    }

    #[tokio::test]
    async fn test_module_option() {
        let temp = fixture();
        let opts = GenerateOptions {
            module: "@db/client".to_string(),
            ..options()
        };
        let output = generate_dir(temp.path(), &PgTypeResolver::new(), &opts)
            .await
            .unwrap();

        assert!(
            output.queries[0]
                .render()
                .starts_with("import { ClientBase } from '@db/client'\n")
        );
    }
}
