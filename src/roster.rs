//! YAML inputs for seeding and driving a [`University`].
//!
//! A [`Roster`] describes the students, courses, prerequisites and
//! enrollments a registry starts with. A [`Script`] is a list of registry
//! operations applied in order. Both are read-only: nothing is ever written
//! back.
//!
//! [`University`]: crate::University

use std::path::{Path, PathBuf};

mod script;
mod seed;

pub use script::{Operation, Script, StepOutcome, StepReport};
pub use seed::{CourseEntry, EnrollmentEntry, Rejection, Roster, StudentEntry};

/// Errors that can occur when reading a roster or a script.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// The path of the file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the expected shape.
    #[error("failed to parse {}", path.display())]
    Yaml {
        /// The path of the file.
        path: PathBuf,
        /// The underlying error.
        source: serde_yaml::Error,
    },
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RosterError> {
    let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| RosterError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
