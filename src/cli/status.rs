use std::process;

use clap::Parser;
use registrar::{EligibilityRule, University};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Show student and course counts and prerequisite cycles")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Status {
    pub fn run(self, university: &University) -> anyhow::Result<()> {
        // Exit with a non-zero code when prerequisites form a cycle.
        if self.report(university)? {
            process::exit(3);
        }

        Ok(())
    }

    /// Print the summary, returning whether any prerequisite cycles exist.
    #[instrument(level = "debug", skip_all)]
    pub fn report(&self, university: &University) -> anyhow::Result<bool> {
        let cycles: Vec<Vec<String>> = university
            .prerequisite_cycles()
            .iter()
            .map(|cycle| cycle.iter().map(ToString::to_string).collect())
            .collect();
        let enrollments: usize = university
            .courses()
            .map(|course| course.enrolled_students().len())
            .sum();

        match self.output {
            OutputFormat::Json => Self::output_json(university, enrollments, &cycles)?,
            OutputFormat::Table if self.quiet => {
                println!(
                    "{} {} {} {}",
                    university.student_count(),
                    university.course_count(),
                    enrollments,
                    cycles.len()
                );
            }
            OutputFormat::Table => Self::output_table(university, enrollments, &cycles),
        }

        Ok(!cycles.is_empty())
    }

    fn output_json(
        university: &University,
        enrollments: usize,
        cycles: &[Vec<String>],
    ) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "name": university.name(),
            "motto": university.motto(),
            "eligibility": university.eligibility(),
            "students": university.student_count(),
            "courses": university.course_count(),
            "enrollments": enrollments,
            "cycles": {
                "count": cycles.len(),
                "members": cycles,
            }
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_table(university: &University, enrollments: usize, cycles: &[Vec<String>]) {
        println!("{university}");
        println!("Enrollments: {enrollments}");

        let rule = match university.eligibility() {
            EligibilityRule::CompletedSubsetOfPrerequisites => {
                "completed courses must all be prerequisites"
            }
            EligibilityRule::PrerequisitesCompleted => "all prerequisites must be completed",
        };
        println!("{}", format!("Eligibility: {rule}").dim());

        if cycles.is_empty() {
            println!("{}", "No prerequisite cycles".success());
        } else {
            println!(
                "{}",
                format!("{} prerequisite cycle(s):", cycles.len()).warning()
            );
            for cycle in cycles {
                println!("  • {}", cycle.join(" → "));
            }
        }
    }
}
