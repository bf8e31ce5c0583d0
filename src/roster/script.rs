use std::{fmt, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    Course, CourseCode, Student, StudentId, University,
    roster::{RosterError, read_yaml},
};

/// A single registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    /// Add a student.
    AddStudent {
        /// The student's ID.
        id: StudentId,
        /// The student's name.
        name: String,
        /// Courses the student has completed.
        #[serde(default)]
        previous: Vec<CourseCode>,
    },
    /// Add a course.
    AddCourse {
        /// The course code.
        code: CourseCode,
        /// The course name.
        name: String,
        /// Codes of prerequisite courses already offered.
        #[serde(default)]
        prerequisites: Vec<CourseCode>,
    },
    /// Add a prerequisite to a course.
    AddRequisite {
        /// The course.
        course: CourseCode,
        /// The prerequisite.
        prerequisite: CourseCode,
    },
    /// Remove a prerequisite from a course.
    RemoveRequisite {
        /// The course.
        course: CourseCode,
        /// The prerequisite.
        prerequisite: CourseCode,
    },
    /// Enroll a student in a course.
    Enroll {
        /// The student.
        student: StudentId,
        /// The course.
        course: CourseCode,
    },
    /// Drop a student from a course.
    Drop {
        /// The student.
        student: StudentId,
        /// The course.
        course: CourseCode,
    },
    /// Record a completed course for a student.
    Complete {
        /// The student.
        student: StudentId,
        /// The course.
        course: CourseCode,
    },
    /// Remove a student from the university.
    RemoveStudent {
        /// The student.
        student: StudentId,
    },
    /// Remove a course from the university.
    RemoveCourse {
        /// The course.
        course: CourseCode,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AddStudent { id, name, .. } => write!(f, "add student {id} ({name})"),
            Self::AddCourse { code, name, .. } => write!(f, "add course {code} ({name})"),
            Self::AddRequisite {
                course,
                prerequisite,
            } => write!(f, "add prerequisite {prerequisite} to {course}"),
            Self::RemoveRequisite {
                course,
                prerequisite,
            } => write!(f, "remove prerequisite {prerequisite} from {course}"),
            Self::Enroll { student, course } => write!(f, "enroll {student} in {course}"),
            Self::Drop { student, course } => write!(f, "drop {student} from {course}"),
            Self::Complete { student, course } => {
                write!(f, "record {course} as completed by {student}")
            }
            Self::RemoveStudent { student } => write!(f, "remove student {student}"),
            Self::RemoveCourse { course } => write!(f, "remove course {course}"),
        }
    }
}

/// What happened when an [`Operation`] was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The university changed.
    Applied,
    /// The operation succeeded but there was nothing to change.
    Unchanged,
    /// The operation was refused.
    Rejected(String),
}

impl StepOutcome {
    /// Whether the operation succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// The result of one step of a [`Script`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The operation applied.
    pub operation: Operation,
    /// What happened.
    pub outcome: StepOutcome,
}

/// An ordered list of operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Script {
    operations: Vec<Operation>,
}

impl Script {
    /// Reads a script from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        read_yaml(path)
    }

    /// The operations in the script.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Applies every operation in order.
    ///
    /// A refused operation does not stop the script.
    #[instrument(skip_all, fields(steps = self.operations.len()))]
    pub fn apply(&self, university: &mut University) -> Vec<StepReport> {
        self.operations
            .iter()
            .map(|operation| {
                let outcome = apply_one(operation, university);
                debug!(%operation, ?outcome);
                StepReport {
                    operation: operation.clone(),
                    outcome,
                }
            })
            .collect()
    }
}

impl FromIterator<Operation> for Script {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl std::str::FromStr for Script {
    type Err = serde_yaml::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(s)
    }
}

const fn changed(changed: bool) -> StepOutcome {
    if changed {
        StepOutcome::Applied
    } else {
        StepOutcome::Unchanged
    }
}

fn apply_one(operation: &Operation, university: &mut University) -> StepOutcome {
    match operation {
        Operation::AddStudent { id, name, previous } => {
            let student = Student::new(name.clone(), *id).with_previous_courses(previous.clone());
            if university.add_student(student) {
                StepOutcome::Applied
            } else {
                StepOutcome::Rejected(format!("student {id} already exists"))
            }
        }
        Operation::AddCourse {
            code,
            name,
            prerequisites,
        } => {
            let course = Course::new(name.clone(), code.clone())
                .with_prerequisites(prerequisites.clone());
            if university.add_course(course) {
                StepOutcome::Applied
            } else {
                StepOutcome::Rejected(format!("course {code} already exists"))
            }
        }
        Operation::AddRequisite {
            course,
            prerequisite,
        } => match university.add_requisite_to_course(course, prerequisite) {
            Ok(outcome) => changed(!outcome.already_present),
            Err(e) => StepOutcome::Rejected(e.to_string()),
        },
        Operation::RemoveRequisite {
            course,
            prerequisite,
        } => match university.remove_requisite_from_course(course, prerequisite) {
            Ok(()) => StepOutcome::Applied,
            Err(e) => StepOutcome::Rejected(e.to_string()),
        },
        Operation::Enroll { student, course } => {
            match university.enroll_student_in_course(*student, course) {
                Ok(outcome) => changed(!outcome.already_enrolled),
                Err(e) => StepOutcome::Rejected(e.to_string()),
            }
        }
        Operation::Drop { student, course } => {
            match university.remove_student_from_course(*student, course) {
                Ok(()) => StepOutcome::Applied,
                Err(e) => StepOutcome::Rejected(e.to_string()),
            }
        }
        Operation::Complete { student, course } => {
            match university.add_previous_course(*student, course) {
                Ok(new) => changed(new),
                Err(e) => StepOutcome::Rejected(e.to_string()),
            }
        }
        Operation::RemoveStudent { student } => {
            if university.remove_student_from_university(*student) {
                StepOutcome::Applied
            } else {
                StepOutcome::Rejected(format!("student {student} not found"))
            }
        }
        Operation::RemoveCourse { course } => {
            if university.remove_course_from_university(course) {
                StepOutcome::Applied
            } else {
                StepOutcome::Rejected(format!("course {course} not found"))
            }
        }
    }
}
