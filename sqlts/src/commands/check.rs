use std::path::Path;

use clap::Args;
use eyre::Result;
use futures::future::join_all;
use sqlts_core::FileStatus;

use super::{CodegenArgs, resolver};
use crate::{
    ops::{self, GenerateOptions},
    reports::{CheckReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CodegenArgs,
}

impl CheckCommand {
    /// Run the check command
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        let config = self.args.config(config_path);
        let resolver = resolver(&config);
        let opts = GenerateOptions::from(&config);

        let mut report = CheckReport::default();

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
                let path = file.path(&generated.dir);
                match file.status(&generated.dir)? {
                    FileStatus::UpToDate => report.up_to_date += 1,
                    FileStatus::Missing => report.missing.push(path),
                    FileStatus::Stale => report.stale.push(path),
                }
            }
            report.failures.extend(generated.failures);
        }

        report.render(&mut TerminalOutput::new());

        if !report.is_clean() {
            std::process::exit(1);
        }
        Ok(())
    }
}
