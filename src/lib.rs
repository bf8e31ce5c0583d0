//! In-memory Academic Registry
//!
//! A [`University`] tracks students and courses and keeps the links between
//! them (enrollments and prerequisites) consistent on both sides.

pub mod domain;
pub use domain::{
    Config, Course, CourseCode, EligibilityRule, EnrollError, EnrollOutcome, LinkError,
    RequisiteOutcome, Student, StudentId, University,
};

/// Read-only YAML seed files and operation scripts.
pub mod roster;
pub use roster::{Roster, RosterError, Script};
