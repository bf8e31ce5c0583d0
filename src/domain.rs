//! Domain models for the registry.
//!
//! This module contains the identifier types, the student and course
//! records, the eligibility rules and the [`University`] itself.

/// Student and course identifiers.
pub mod ids;
pub use ids::{CourseCode, InvalidCourseCode, InvalidStudentId, StudentId};

mod student;
pub use student::Student;

mod course;
pub use course::Course;

/// Prerequisite eligibility rules.
pub mod eligibility;
pub use eligibility::{EligibilityRule, Ineligible};

mod config;
pub use config::Config;

/// The registry owning students, courses and the links between them.
pub mod university;
pub use university::{EnrollError, EnrollOutcome, LinkError, RequisiteOutcome, University};
