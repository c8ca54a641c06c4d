mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use sqlts_codegen_typescript::PgTypeResolver;
use sqlts_config::{Config, DEFAULT_CONFIG_FILE, SqltsToml};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sqlts_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sqlts")]
#[command(version)]
#[command(about = "Generate typed TypeScript functions from SQL statements")]
pub(crate) struct Cli {
    /// Path to sqlts.toml (defaults to ./sqlts.toml, optional)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.config).await,
            Commands::Check(cmd) => cmd.run(&self.config).await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript functions for every statement in the given directories
    Generate(GenerateCommand),

    /// Verify generated files are up to date without writing
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by `generate` and `check`.
#[derive(Args)]
pub(crate) struct CodegenArgs {
    /// Directories containing .sql files and their .json descriptions
    #[arg(default_value = ".")]
    pub dirs: Vec<PathBuf>,

    /// Module to import ClientBase from (overrides generate.module)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Don't generate index.ts (overrides generate.index)
    #[arg(long)]
    pub no_index: bool,
}

impl CodegenArgs {
    /// Load the config file and apply command line overrides.
    pub fn config(&self, path: &std::path::Path) -> Config {
        let mut config = SqltsToml::open_or_default(path)
            .unwrap_or_exit()
            .into_config();
        if let Some(module) = &self.module {
            config.generate.module = module.clone();
        }
        if self.no_index {
            config.generate.index = false;
        }
        config
    }
}

pub(crate) fn resolver(config: &Config) -> PgTypeResolver {
    PgTypeResolver::new().with_overrides(config.types.clone())
}
