use std::path::{Path, PathBuf};

mod check;
mod list;
mod run;
mod show;
mod status;
mod terminal;

use check::Check;
use clap::ArgAction;
use list::List;
use registrar::{Config, CourseCode, Roster, University};
use run::Run;
use show::Show;
use status::Status;
use tracing::instrument;

/// Parse a course code, ignoring surrounding whitespace.
fn parse_course_code(s: &str) -> Result<CourseCode, String> {
    s.trim().parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the university configuration file
    #[arg(short, long, default_value = "university.toml", global = true)]
    config: PathBuf,

    /// Path to the roster used to seed the registry
    #[arg(short, long, default_value = "roster.yaml", global = true)]
    roster: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let university = load_university(&self.config, &self.roster)?;

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(university)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Build the registry from the configuration and roster files.
///
/// A missing configuration falls back to the defaults and a missing roster
/// gives an empty university.
#[instrument]
fn load_university(config: &Path, roster: &Path) -> anyhow::Result<University> {
    use terminal::Colorize;

    let config = Config::load_or_default(config).map_err(anyhow::Error::msg)?;

    let roster = if roster.exists() {
        Roster::load(roster)?
    } else {
        tracing::info!(path = %roster.display(), "no roster file, starting empty");
        Roster::default()
    };

    let (university, rejections) = roster.build(&config);
    for rejection in rejections {
        eprintln!("{}", format!("roster: {rejection}").warning());
    }

    Ok(university)
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show a summary of the university (default)
    Status(Status),

    /// List students or courses
    List(List),

    /// Show detailed information about a student or a course
    Show(Show),

    /// Check whether a student may enroll in a course
    Check(Check),

    /// Apply a script of operations to the registry and report each step
    ///
    /// Changes only last for the duration of the command.
    Run(Run),
}

impl Command {
    fn run(self, university: University) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(&university)?,
            Self::List(command) => command.run(&university)?,
            Self::Show(command) => command.run(&university)?,
            Self::Check(command) => command.run(&university)?,
            Self::Run(command) => command.run(university)?,
        }
        Ok(())
    }
}
