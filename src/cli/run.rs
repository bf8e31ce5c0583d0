use std::{path::PathBuf, process};

use clap::Parser;
use registrar::{
    University,
    roster::{Script, StepOutcome},
};
use tracing::instrument;

use super::{status::Status, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Apply a script of registry operations")]
pub struct Run {
    /// Path to the YAML script
    script: PathBuf,

    /// Print the university summary after the script
    #[arg(long)]
    summary: bool,

    /// Exit with a non-zero code if any operation is rejected
    #[arg(long)]
    strict: bool,
}

impl Run {
    #[instrument(level = "debug", skip(university))]
    pub fn run(self, mut university: University) -> anyhow::Result<()> {
        let script = Script::load(&self.script)?;
        let reports = script.apply(&mut university);

        let mut rejected = 0;
        for (step, report) in reports.iter().enumerate() {
            let status = match &report.outcome {
                StepOutcome::Applied => "ok".success(),
                StepOutcome::Unchanged => "unchanged".dim(),
                StepOutcome::Rejected(reason) => {
                    rejected += 1;
                    format!("rejected: {reason}").warning()
                }
            };
            println!("{:>3}. {}: {status}", step + 1, report.operation);
        }

        let has_cycles = if self.summary {
            println!();
            Status::default().report(&university)?
        } else {
            false
        };

        if let Some(code) = self.exit_code(rejected, has_cycles) {
            process::exit(code);
        }

        Ok(())
    }

    /// Rejected steps under `--strict` take precedence over cycles shown by
    /// `--summary`.
    const fn exit_code(&self, rejected: usize, has_cycles: bool) -> Option<i32> {
        if self.strict && rejected > 0 {
            Some(1)
        } else if has_cycles {
            Some(3)
        } else {
            None
        }
    }
}
