//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::ops::Failure;

/// Report data from comparing generated files against disk.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub up_to_date: usize,
    pub missing: Vec<PathBuf>,
    pub stale: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl CheckReport {
    /// Whether every statement generated and every file matched.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty() && self.failures.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!("{}: {}", failure.path.display(), failure.message));
        }

        if !self.missing.is_empty() {
            out.section("Missing");
            for path in &self.missing {
                out.added_item(&path.display().to_string());
            }
        }

        if !self.stale.is_empty() {
            out.section("Out of date");
            for path in &self.stale {
                out.changed_item(&path.display().to_string());
            }
        }

        if self.is_clean() {
            out.preformatted(&format!("✓ {} file(s) up to date", self.up_to_date));
        } else {
            out.newline();
            out.preformatted("Run `sqlts generate` to update");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_clean() {
        let report = CheckReport {
            up_to_date: 3,
            ..CheckReport::default()
        };
        assert!(report.is_clean());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["✓ 3 file(s) up to date"]);
    }

    #[test]
    fn test_missing_and_stale() {
        let report = CheckReport {
            up_to_date: 1,
            missing: vec![PathBuf::from("q/index.ts")],
            stale: vec![PathBuf::from("q/get_user.ts")],
            failures: Vec::new(),
        };
        assert!(!report.is_clean());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Missing:",
                "  + q/index.ts",
                "Out of date:",
                "  ~ q/get_user.ts",
                "",
                "Run `sqlts generate` to update",
            ]
        );
    }
}
