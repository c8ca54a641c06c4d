use std::path::Path;

use clap::Args;
use eyre::{Context, Result};
use futures::future::join_all;

use super::{CodegenArgs, resolver};
use crate::{
    ops::{self, GenerateOptions},
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: CodegenArgs,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        let config = self.args.config(config_path);
        let resolver = resolver(&config);
        let opts = GenerateOptions::from(&config);

        let mut report = GenerateReport::new(self.dry_run);
        let mut out = TerminalOutput::new();

        let outputs = join_all(
            self.args
                .dirs
                .iter()
                .map(|dir| ops::generate_dir(dir, &resolver, &opts)),
        )
        .await;

        for generated in outputs {
            let generated = generated?;

            for file in generated.files() {
                if self.dry_run {
                    report.preview(file.path(&generated.dir), file.render());
                } else {
                    let path = file
                        .write(&generated.dir)
                        .wrap_err("Failed to write generated file")?;
                    report.written.push(path);
                }
            }
            report.failures.extend(generated.failures);
        }

        report.render(&mut out);

        if !report.failures.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }
}
