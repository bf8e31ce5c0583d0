use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::EligibilityRule;

/// Configuration for a university registry.
///
/// This holds the descriptive fields shown in the registry summary and the
/// rule used to check prerequisites on enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The name of the university.
    pub name: String,

    /// The university's motto.
    pub motto: String,

    /// The rule applied when enrolling a student in a course with
    /// prerequisites.
    pub eligibility: EligibilityRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            motto: String::new(),
            eligibility: EligibilityRule::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration if the file exists, falling back to the
    /// default otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}

fn default_name() -> String {
    "University".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_name")]
        name: String,

        #[serde(default, skip_serializing_if = "String::is_empty")]
        motto: String,

        /// Either `completed-subset-of-prerequisites` or
        /// `prerequisites-completed`.
        #[serde(default)]
        eligibility: EligibilityRule,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                name,
                motto,
                eligibility,
            } => Self {
                name,
                motto,
                eligibility,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            name: config.name,
            motto: config.motto,
            eligibility: config.eligibility,
        }
    }
}
