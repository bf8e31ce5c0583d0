use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::CourseCode;

/// The rule used to decide whether a student may enroll in a course which
/// has prerequisites.
///
/// Courses without prerequisites are open to everyone regardless of the rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityRule {
    /// The student must have completed at least one course, and every
    /// completed course must be listed as a prerequisite of the target.
    ///
    /// Note that this is the inverse of the usual academic rule. A student
    /// who has completed all prerequisites *and* an unrelated course is
    /// rejected, while a student who completed only one of several
    /// prerequisites is accepted.
    #[default]
    CompletedSubsetOfPrerequisites,

    /// Every prerequisite of the target must have been completed.
    PrerequisitesCompleted,
}

/// Reasons a student is not eligible for a course.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Ineligible {
    /// The student has not completed any courses.
    #[error("no completed courses on record")]
    NoCompletedCourses,

    /// A completed course is not a listed prerequisite.
    #[error("completed course {course} is not a listed prerequisite")]
    UnlistedCompletion {
        /// The offending completed course.
        course: CourseCode,
    },

    /// Some prerequisites have not been completed.
    #[error("missing prerequisites: {}", join(.missing))]
    MissingPrerequisites {
        /// The prerequisites not yet completed, in ascending order.
        missing: Vec<CourseCode>,
    },
}

fn join(codes: &[CourseCode]) -> String {
    codes
        .iter()
        .map(CourseCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl EligibilityRule {
    /// Check a student's completed courses against a course's prerequisites.
    ///
    /// # Errors
    ///
    /// Returns the reason the student is ineligible.
    pub fn check(
        self,
        completed: &BTreeSet<CourseCode>,
        prerequisites: &BTreeSet<CourseCode>,
    ) -> Result<(), Ineligible> {
        if prerequisites.is_empty() {
            return Ok(());
        }

        match self {
            Self::CompletedSubsetOfPrerequisites => {
                if completed.is_empty() {
                    return Err(Ineligible::NoCompletedCourses);
                }
                completed
                    .difference(prerequisites)
                    .next()
                    .map_or(Ok(()), |course| {
                        Err(Ineligible::UnlistedCompletion {
                            course: course.clone(),
                        })
                    })
            }
            Self::PrerequisitesCompleted => {
                let missing: Vec<_> = prerequisites.difference(completed).cloned().collect();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(Ineligible::MissingPrerequisites { missing })
                }
            }
        }
    }
}
