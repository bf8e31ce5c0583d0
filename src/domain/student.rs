use std::collections::BTreeSet;

use crate::domain::{CourseCode, StudentId};

/// A student record.
///
/// Students are built independently of any [`University`] and become tracked
/// once added to one. The set of currently enrolled courses is owned by the
/// registry and cannot be modified directly.
///
/// [`University`]: crate::University
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub(crate) id: StudentId,
    pub(crate) name: String,
    /// Courses the student is enrolled in this term.
    pub(crate) enrolled_courses: BTreeSet<CourseCode>,
    /// Courses the student has completed.
    ///
    /// Codes are matched against the courses on offer. Removing a course
    /// from the university strikes it from this record too.
    pub(crate) previous_courses: BTreeSet<CourseCode>,
}

impl Student {
    /// Construct a new [`Student`] with no course history.
    #[must_use]
    pub fn new(name: impl Into<String>, id: StudentId) -> Self {
        Self {
            id,
            name: name.into(),
            enrolled_courses: BTreeSet::new(),
            previous_courses: BTreeSet::new(),
        }
    }

    /// Set the completed courses on the record.
    ///
    /// This replaces any existing history.
    #[must_use]
    pub fn with_previous_courses(mut self, courses: impl IntoIterator<Item = CourseCode>) -> Self {
        self.previous_courses = courses.into_iter().collect();
        self
    }

    /// The student's ID.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// The student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Courses the student is currently enrolled in.
    #[must_use]
    pub const fn enrolled_courses(&self) -> &BTreeSet<CourseCode> {
        &self.enrolled_courses
    }

    /// Courses the student has completed.
    #[must_use]
    pub const fn previous_courses(&self) -> &BTreeSet<CourseCode> {
        &self.previous_courses
    }

    /// Whether the student is enrolled in the given course.
    #[must_use]
    pub fn is_enrolled_in(&self, course: &CourseCode) -> bool {
        self.enrolled_courses.contains(course)
    }
}
