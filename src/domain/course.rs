use std::collections::BTreeSet;

use crate::domain::{CourseCode, StudentId};

/// A course offered by a university.
///
/// Prerequisites and enrolled students are stored as keys into the owning
/// registry and are only modified through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub(crate) code: CourseCode,
    pub(crate) name: String,
    pub(crate) prerequisites: BTreeSet<CourseCode>,
    pub(crate) enrolled_students: BTreeSet<StudentId>,
}

impl Course {
    /// Construct a new [`Course`] with no prerequisites.
    #[must_use]
    pub fn new(name: impl Into<String>, code: CourseCode) -> Self {
        Self {
            code,
            name: name.into(),
            prerequisites: BTreeSet::new(),
            enrolled_students: BTreeSet::new(),
        }
    }

    /// Declare prerequisites on the record before it is added to a
    /// university.
    ///
    /// Codes which do not name a course already offered by the university are
    /// dropped when the course is added.
    #[must_use]
    pub fn with_prerequisites(mut self, codes: impl IntoIterator<Item = CourseCode>) -> Self {
        self.prerequisites = codes.into_iter().collect();
        self
    }

    /// The course code.
    #[must_use]
    pub const fn code(&self) -> &CourseCode {
        &self.code
    }

    /// The course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The courses listed as prerequisites.
    #[must_use]
    pub const fn prerequisites(&self) -> &BTreeSet<CourseCode> {
        &self.prerequisites
    }

    /// The students currently enrolled.
    #[must_use]
    pub const fn enrolled_students(&self) -> &BTreeSet<StudentId> {
        &self.enrolled_students
    }
}
