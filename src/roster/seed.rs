use std::path::Path;

use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{
    Config, Course, CourseCode, Student, StudentId, University,
    domain::{EnrollError, LinkError},
    roster::{RosterError, read_yaml},
};

/// The initial contents of a university.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    /// Students to add.
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    /// Courses to add.
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    /// Enrollments to make once all students and courses are present.
    #[serde(default)]
    pub enrollments: Vec<EnrollmentEntry>,
}

/// A student in a [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentEntry {
    /// The student's ID.
    pub id: StudentId,
    /// The student's name.
    pub name: String,
    /// Courses the student has completed.
    ///
    /// These need not be offered by the university. A course listed here
    /// and offered under the same code counts as completed.
    #[serde(default)]
    pub previous: Vec<CourseCode>,
}

/// A course in a [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseEntry {
    /// The course code.
    pub code: CourseCode,
    /// The course name.
    pub name: String,
    /// Codes of the prerequisite courses.
    ///
    /// Prerequisites may be declared before the course they name.
    #[serde(default)]
    pub prerequisites: Vec<CourseCode>,
}

/// An enrollment in a [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrollmentEntry {
    /// The student to enroll.
    pub student: StudentId,
    /// The course to enroll in.
    pub course: CourseCode,
}

/// An entry in a [`Roster`] which the university refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A student ID appears more than once.
    #[error("duplicate student {0}")]
    DuplicateStudent(StudentId),
    /// A course code appears more than once.
    #[error("duplicate course {0}")]
    DuplicateCourse(CourseCode),
    /// A prerequisite could not be linked.
    #[error(transparent)]
    Prerequisite(#[from] LinkError),
    /// An enrollment was refused.
    #[error(transparent)]
    Enrollment(#[from] EnrollError),
}

impl Roster {
    /// Reads a roster from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        read_yaml(path)
    }

    /// Builds a university from this roster.
    ///
    /// Courses are added first, then their prerequisites, then students, and
    /// finally enrollments. Entries the university refuses are skipped and
    /// returned alongside it.
    #[must_use]
    #[instrument(skip_all)]
    pub fn build(&self, config: &Config) -> (University, Vec<Rejection>) {
        let mut university = University::from_config(config);
        let mut rejections = Vec::new();

        for entry in &self.courses {
            if !university.add_course(Course::new(entry.name.clone(), entry.code.clone())) {
                rejections.push(Rejection::DuplicateCourse(entry.code.clone()));
            }
        }

        for entry in &self.courses {
            for prerequisite in &entry.prerequisites {
                if let Err(e) = university.add_requisite_to_course(&entry.code, prerequisite) {
                    rejections.push(e.into());
                }
            }
        }

        for entry in &self.students {
            let student = Student::new(entry.name.clone(), entry.id)
                .with_previous_courses(entry.previous.iter().cloned());
            if !university.add_student(student) {
                rejections.push(Rejection::DuplicateStudent(entry.id));
            }
        }

        for entry in &self.enrollments {
            if let Err(e) = university.enroll_student_in_course(entry.student, &entry.course) {
                rejections.push(e.into());
            }
        }

        for rejection in &rejections {
            warn!("roster entry rejected: {rejection}");
        }

        (university, rejections)
    }
}

impl std::str::FromStr for Roster {
    type Err = serde_yaml::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(s)
    }
}
