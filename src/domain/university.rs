//! The in-memory registry of students and courses.
//!
//! The [`University`] owns two primary indexes, students by ID and courses by
//! code, and is the only place where links between entities are created or
//! removed. Every link is stored on both sides:
//!
//! - a student lists the codes of the courses it is enrolled in, and each of
//!   those courses lists the student's ID;
//! - a course lists the codes of its prerequisites.
//!
//! Removing a student or a course strips every reference to it held by the
//! remaining entities.

use std::{collections::BTreeMap, fmt};

use petgraph::{algo::tarjan_scc, graphmap::DiGraphMap};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Config, Course, CourseCode, EligibilityRule, Ineligible, Student, StudentId};

/// A university: the owner of all students, courses and the links between
/// them.
#[derive(Debug, Clone, Default)]
pub struct University {
    name: String,
    motto: String,
    eligibility: EligibilityRule,

    /// Primary student index.
    students: BTreeMap<StudentId, Student>,

    /// Primary course index.
    courses: BTreeMap<CourseCode, Course>,
}

/// Errors that can occur when linking a course to a prerequisite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The course could not be found.
    #[error("course {0} not found")]
    CourseNotFound(CourseCode),
    /// The prerequisite course could not be found.
    #[error("prerequisite course {0} not found")]
    PrerequisiteNotFound(CourseCode),
    /// The course does not list the prerequisite.
    #[error("{prerequisite} is not a prerequisite of {course}")]
    NotLinked {
        /// The course.
        course: CourseCode,
        /// The prerequisite which is not listed.
        prerequisite: CourseCode,
    },
}

/// Errors that can occur when enrolling or dropping a student.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollError {
    /// The student could not be found.
    #[error("student {0} not found")]
    StudentNotFound(StudentId),
    /// The course could not be found.
    #[error("course {0} not found")]
    CourseNotFound(CourseCode),
    /// The student is not enrolled in the course.
    #[error("student {student} is not enrolled in {course}")]
    NotEnrolled {
        /// ID of the student.
        student: StudentId,
        /// Code of the course.
        course: CourseCode,
    },
    /// The student does not satisfy the course's prerequisites.
    #[error("student {student} is not eligible for {course}: {reason}")]
    Ineligible {
        /// ID of the student.
        student: StudentId,
        /// Code of the course.
        course: CourseCode,
        /// Why the student is not eligible.
        reason: Ineligible,
    },
}

/// Result of adding a prerequisite to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequisiteOutcome {
    /// Whether the prerequisite was already listed.
    pub already_present: bool,
}

/// Result of enrolling a student in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollOutcome {
    /// Whether the student was already enrolled prior to the call.
    pub already_enrolled: bool,
}

enum Assessment {
    AlreadyEnrolled,
    Eligible,
}

impl University {
    /// Creates an empty university using the default eligibility rule.
    #[must_use]
    pub fn new(name: impl Into<String>, motto: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            motto: motto.into(),
            ..Self::default()
        }
    }

    /// Creates an empty university from its configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.name.clone(), config.motto.clone()).with_eligibility(config.eligibility)
    }

    /// Sets the rule used to check prerequisites on enrollment.
    #[must_use]
    pub const fn with_eligibility(mut self, rule: EligibilityRule) -> Self {
        self.eligibility = rule;
        self
    }

    /// The university's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The university's motto.
    #[must_use]
    pub fn motto(&self) -> &str {
        &self.motto
    }

    /// The rule used to check prerequisites on enrollment.
    #[must_use]
    pub const fn eligibility(&self) -> EligibilityRule {
        self.eligibility
    }

    /// Adds a student to the university.
    ///
    /// Any enrollments carried by the record are discarded; students are
    /// enrolled through [`University::enroll_student_in_course`].
    ///
    /// Returns `false`, leaving the existing student untouched, if a student
    /// with the same ID is already present.
    #[instrument(skip(self, student), fields(id = %student.id))]
    pub fn add_student(&mut self, mut student: Student) -> bool {
        if self.students.contains_key(&student.id) {
            debug!("student ID already in use");
            return false;
        }

        student.enrolled_courses.clear();
        self.students.insert(student.id, student);
        true
    }

    /// Adds a new student with no course history.
    ///
    /// Returns `false` if a student with the same ID is already present.
    pub fn add_student_named(&mut self, name: impl Into<String>, id: StudentId) -> bool {
        self.add_student(Student::new(name, id))
    }

    /// Adds a course to the university.
    ///
    /// Prerequisites declared on the record are kept only if they name a
    /// course already offered (or the course itself). Enrolled students on
    /// the record are discarded.
    ///
    /// Returns `false` if a course with the same code is already present.
    #[instrument(skip(self, course), fields(code = %course.code))]
    pub fn add_course(&mut self, mut course: Course) -> bool {
        if self.courses.contains_key(&course.code) {
            debug!("course code already in use");
            return false;
        }

        let code = course.code.clone();
        course
            .prerequisites
            .retain(|prerequisite| *prerequisite == code || self.courses.contains_key(prerequisite));
        course.enrolled_students.clear();
        self.courses.insert(code, course);
        true
    }

    /// Adds a new course with no prerequisites.
    ///
    /// Returns `false` if a course with the same code is already present.
    pub fn add_course_named(&mut self, name: impl Into<String>, code: CourseCode) -> bool {
        self.add_course(Course::new(name, code))
    }

    /// Looks up a student by ID.
    #[must_use]
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Looks up a course by code.
    ///
    /// `code` is matched as given; codes are stored in uppercase.
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Returns an iterator over all students, in ascending ID order.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    /// Returns an iterator over all courses, in ascending code order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.values()
    }

    /// The number of students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// The number of courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Lists `prerequisite` as a prerequisite of `course`.
    ///
    /// No cycle check is performed; a course may even be its own
    /// prerequisite. See [`University::prerequisite_cycles`].
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::CourseNotFound`] or
    /// [`LinkError::PrerequisiteNotFound`] when either code is unknown.
    #[instrument(skip(self))]
    pub fn add_requisite_to_course(
        &mut self,
        course: &CourseCode,
        prerequisite: &CourseCode,
    ) -> Result<RequisiteOutcome, LinkError> {
        let prerequisite_known = self.courses.contains_key(prerequisite);
        let target = self
            .courses
            .get_mut(course)
            .ok_or_else(|| LinkError::CourseNotFound(course.clone()))?;
        if !prerequisite_known {
            return Err(LinkError::PrerequisiteNotFound(prerequisite.clone()));
        }

        let already_present = !target.prerequisites.insert(prerequisite.clone());
        Ok(RequisiteOutcome { already_present })
    }

    /// Removes `prerequisite` from the prerequisites of `course`.
    ///
    /// # Errors
    ///
    /// Returns an error if either course is unknown or if the prerequisite is
    /// not listed.
    #[instrument(skip(self))]
    pub fn remove_requisite_from_course(
        &mut self,
        course: &CourseCode,
        prerequisite: &CourseCode,
    ) -> Result<(), LinkError> {
        let prerequisite_known = self.courses.contains_key(prerequisite);
        let target = self
            .courses
            .get_mut(course)
            .ok_or_else(|| LinkError::CourseNotFound(course.clone()))?;
        if !prerequisite_known {
            return Err(LinkError::PrerequisiteNotFound(prerequisite.clone()));
        }

        if target.prerequisites.remove(prerequisite) {
            Ok(())
        } else {
            Err(LinkError::NotLinked {
                course: course.clone(),
                prerequisite: prerequisite.clone(),
            })
        }
    }

    /// Checks whether a student may enroll in a course, without enrolling.
    ///
    /// A student who is already enrolled is considered eligible.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is unknown or the student does not
    /// satisfy the configured [`EligibilityRule`].
    pub fn check_eligibility(&self, id: StudentId, code: &CourseCode) -> Result<(), EnrollError> {
        self.assess(id, code).map(|_| ())
    }

    /// Enrolls a student in a course.
    ///
    /// Enrollment is idempotent: enrolling a student who is already enrolled
    /// succeeds without changing anything, and the outcome reports
    /// `already_enrolled`.
    ///
    /// Courses without prerequisites accept any student. Otherwise the
    /// student's completed courses are checked with the configured
    /// [`EligibilityRule`].
    ///
    /// # Errors
    ///
    /// Returns an error, without modifying anything, if either key is unknown
    /// or the student is not eligible.
    #[instrument(skip(self))]
    pub fn enroll_student_in_course(
        &mut self,
        id: StudentId,
        code: &CourseCode,
    ) -> Result<EnrollOutcome, EnrollError> {
        match self.assess(id, code) {
            Ok(Assessment::AlreadyEnrolled) => Ok(EnrollOutcome {
                already_enrolled: true,
            }),
            Ok(Assessment::Eligible) => {
                if let Some(course) = self.courses.get_mut(code) {
                    course.enrolled_students.insert(id);
                }
                if let Some(student) = self.students.get_mut(&id) {
                    student.enrolled_courses.insert(code.clone());
                }
                Ok(EnrollOutcome {
                    already_enrolled: false,
                })
            }
            Err(e) => {
                debug!(error = %e, "enrollment rejected");
                Err(e)
            }
        }
    }

    /// Drops a student from a course, removing the link on both sides.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is unknown or the student is not
    /// enrolled in the course.
    #[instrument(skip(self))]
    pub fn remove_student_from_course(
        &mut self,
        id: StudentId,
        code: &CourseCode,
    ) -> Result<(), EnrollError> {
        let course = self
            .courses
            .get_mut(code)
            .ok_or_else(|| EnrollError::CourseNotFound(code.clone()))?;
        let student = self
            .students
            .get_mut(&id)
            .ok_or(EnrollError::StudentNotFound(id))?;

        if !course.enrolled_students.remove(&id) {
            return Err(EnrollError::NotEnrolled {
                student: id,
                course: code.clone(),
            });
        }
        student.enrolled_courses.remove(code);
        Ok(())
    }

    /// Records a completed course for a student.
    ///
    /// Returns `true` if the course was not already on the student's record.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is unknown.
    #[instrument(skip(self))]
    pub fn add_previous_course(
        &mut self,
        id: StudentId,
        code: &CourseCode,
    ) -> Result<bool, EnrollError> {
        if !self.courses.contains_key(code) {
            return Err(EnrollError::CourseNotFound(code.clone()));
        }
        let student = self
            .students
            .get_mut(&id)
            .ok_or(EnrollError::StudentNotFound(id))?;

        Ok(student.previous_courses.insert(code.clone()))
    }

    /// Removes a student from the university and from every course it is
    /// enrolled in.
    ///
    /// Returns `false` if the student is unknown.
    #[instrument(skip(self))]
    pub fn remove_student_from_university(&mut self, id: StudentId) -> bool {
        let Some(student) = self.students.remove(&id) else {
            debug!("student not found");
            return false;
        };

        for code in &student.enrolled_courses {
            if let Some(course) = self.courses.get_mut(code) {
                course.enrolled_students.remove(&id);
            }
        }
        debug!(
            courses = student.enrolled_courses.len(),
            "student removed from enrolled courses"
        );

        true
    }

    /// Removes a course from the university.
    ///
    /// The course is also removed from the prerequisites of every other
    /// course, and from the enrollments and completed courses of every
    /// student. A course later added under the same code is a new course.
    ///
    /// Returns `false` if the course is unknown.
    #[instrument(skip(self))]
    pub fn remove_course_from_university(&mut self, code: &CourseCode) -> bool {
        if self.courses.remove(code).is_none() {
            debug!("course not found");
            return false;
        }

        for course in self.courses.values_mut() {
            course.prerequisites.remove(code);
        }
        for student in self.students.values_mut() {
            student.enrolled_courses.remove(code);
            student.previous_courses.remove(code);
        }

        true
    }

    /// Return all prerequisite cycles as sets of course codes.
    ///
    /// Each cycle is sorted, as is the returned list. A course listed as its
    /// own prerequisite forms a cycle of one.
    #[must_use]
    pub fn prerequisite_cycles(&self) -> Vec<Vec<CourseCode>> {
        let graph = self.prerequisite_graph();
        let mut cycles = Vec::new();

        for component in tarjan_scc(&graph) {
            let is_cycle = match component.as_slice() {
                [] => false,
                [node] => graph.contains_edge(*node, *node),
                _ => true,
            };
            if !is_cycle {
                continue;
            }

            let mut codes: Vec<_> = component
                .iter()
                .filter_map(|code| self.courses.get_key_value(*code))
                .map(|(code, _)| code.clone())
                .collect();
            codes.sort();
            cycles.push(codes);
        }

        cycles.sort();
        cycles
    }

    /// Determine whether the prerequisite graph contains any cycles.
    #[must_use]
    pub fn has_prerequisite_cycles(&self) -> bool {
        !self.prerequisite_cycles().is_empty()
    }
}

impl University {
    fn assess(&self, id: StudentId, code: &CourseCode) -> Result<Assessment, EnrollError> {
        let student = self
            .students
            .get(&id)
            .ok_or(EnrollError::StudentNotFound(id))?;
        let course = self
            .courses
            .get(code)
            .ok_or_else(|| EnrollError::CourseNotFound(code.clone()))?;

        if student.is_enrolled_in(code) {
            return Ok(Assessment::AlreadyEnrolled);
        }

        self.eligibility
            .check(&student.previous_courses, &course.prerequisites)
            .map_err(|reason| EnrollError::Ineligible {
                student: id,
                course: code.clone(),
                reason,
            })?;

        Ok(Assessment::Eligible)
    }

    /// Edges point from a course to each of its prerequisites.
    fn prerequisite_graph(&self) -> DiGraphMap<&str, ()> {
        let mut graph = DiGraphMap::with_capacity(self.courses.len(), self.courses.len());
        for (code, course) in &self.courses {
            graph.add_node(code.as_str());
            for prerequisite in &course.prerequisites {
                graph.add_edge(code.as_str(), prerequisite.as_str(), ());
            }
        }
        graph
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({})\nNumber of Students: {}\nNumber of Courses {}",
            self.name,
            self.motto,
            self.students.len(),
            self.courses.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u32) -> StudentId {
        StudentId::new(value).unwrap()
    }

    fn code(value: &str) -> CourseCode {
        CourseCode::try_from(value).unwrap()
    }

    fn student(value: u32, previous: &[&str]) -> Student {
        Student::new(format!("Student {value}"), id(value))
            .with_previous_courses(previous.iter().map(|c| code(c)))
    }

    fn course(value: &str) -> Course {
        Course::new(format!("Course {value}"), code(value))
    }

    /// CS101 is a prerequisite of CS102.
    fn university() -> University {
        let mut university = University::new("Example", "Lux et veritas");
        assert!(university.add_course(course("CS101")));
        assert!(university.add_course(course("CS102")));
        university
            .add_requisite_to_course(&code("CS102"), &code("CS101"))
            .unwrap();
        university
    }

    fn assert_symmetric(university: &University) {
        for student in university.students() {
            for c in student.enrolled_courses() {
                let course = university.course(c).expect("enrolled course must exist");
                assert!(
                    course.enrolled_students().contains(&student.id()),
                    "{c} does not list student {}",
                    student.id()
                );
            }
        }
        for course in university.courses() {
            for s in course.enrolled_students() {
                let student = university.student(*s).expect("enrolled student must exist");
                assert!(
                    student.enrolled_courses().contains(course.code()),
                    "student {s} does not list {}",
                    course.code()
                );
            }
        }
    }

    #[test]
    fn empty_university_has_no_entities() {
        let university = University::new("Example", "Lux");
        assert_eq!(university.students().count(), 0);
        assert_eq!(university.courses().count(), 0);
        assert!(university.student(id(1)).is_none());
        assert!(university.course("CS101").is_none());
    }

    #[test]
    fn duplicate_student_is_rejected_and_original_kept() {
        let mut university = University::default();
        assert!(university.add_student(Student::new("Ada", id(1))));
        assert!(!university.add_student(Student::new("Grace", id(1))));

        assert_eq!(university.student_count(), 1);
        assert_eq!(university.student(id(1)).unwrap().name(), "Ada");
    }

    #[test]
    fn duplicate_course_code_is_rejected() {
        let mut university = University::default();
        assert!(university.add_course(course("CS101")));
        assert!(!university.add_course(Course::new("Other", code("CS101"))));

        assert_eq!(university.course_count(), 1);
        assert_eq!(university.course("CS101").unwrap().name(), "Course CS101");
    }

    #[test]
    fn add_course_drops_unknown_prerequisites() {
        let mut university = University::default();
        university.add_course(course("CS101"));
        university.add_course(
            course("CS102").with_prerequisites([code("CS101"), code("GHOST"), code("CS102")]),
        );

        let prerequisites = university.course("CS102").unwrap().prerequisites();
        assert_eq!(
            prerequisites.iter().map(CourseCode::as_str).collect::<Vec<_>>(),
            ["CS101", "CS102"]
        );
    }

    #[test]
    fn add_requisite_requires_both_courses() {
        let mut university = university();

        assert_eq!(
            university.add_requisite_to_course(&code("NOPE"), &code("CS101")),
            Err(LinkError::CourseNotFound(code("NOPE")))
        );
        assert_eq!(
            university.add_requisite_to_course(&code("CS101"), &code("NOPE")),
            Err(LinkError::PrerequisiteNotFound(code("NOPE")))
        );
        assert!(university.course("CS101").unwrap().prerequisites().is_empty());
    }

    #[test]
    fn add_requisite_dedupes() {
        let mut university = university();

        let outcome = university
            .add_requisite_to_course(&code("CS102"), &code("CS101"))
            .unwrap();
        assert!(outcome.already_present);
        assert_eq!(university.course("CS102").unwrap().prerequisites().len(), 1);
    }

    #[test]
    fn remove_requisite_requires_existing_link() {
        let mut university = university();

        assert_eq!(
            university.remove_requisite_from_course(&code("CS101"), &code("CS102")),
            Err(LinkError::NotLinked {
                course: code("CS101"),
                prerequisite: code("CS102"),
            })
        );
        university
            .remove_requisite_from_course(&code("CS102"), &code("CS101"))
            .unwrap();
        assert!(university.course("CS102").unwrap().prerequisites().is_empty());
    }

    #[test]
    fn enroll_with_completed_prerequisite_is_idempotent() {
        let mut university = university();
        university.add_student(student(1, &["CS101"]));

        let first = university
            .enroll_student_in_course(id(1), &code("CS102"))
            .unwrap();
        assert!(!first.already_enrolled);

        let before = university.clone();
        let second = university
            .enroll_student_in_course(id(1), &code("CS102"))
            .unwrap();
        assert!(second.already_enrolled);

        assert_eq!(university.student(id(1)), before.student(id(1)));
        assert_eq!(university.course("CS102"), before.course("CS102"));
        assert_eq!(university.course("CS102").unwrap().enrolled_students().len(), 1);
        assert_symmetric(&university);
    }

    #[test]
    fn enroll_without_history_fails() {
        let mut university = university();
        university.add_student(student(2, &[]));

        let err = university
            .enroll_student_in_course(id(2), &code("CS102"))
            .unwrap_err();
        assert_eq!(
            err,
            EnrollError::Ineligible {
                student: id(2),
                course: code("CS102"),
                reason: Ineligible::NoCompletedCourses,
            }
        );
        assert!(university.student(id(2)).unwrap().enrolled_courses().is_empty());
        assert!(university.course("CS102").unwrap().enrolled_students().is_empty());
    }

    #[test]
    fn enroll_with_unlisted_completion_fails_under_literal_rule() {
        let mut university = university();
        university.add_course(course("ART100"));
        university.add_student(student(3, &["CS101", "ART100"]));

        assert!(matches!(
            university.enroll_student_in_course(id(3), &code("CS102")),
            Err(EnrollError::Ineligible {
                reason: Ineligible::UnlistedCompletion { .. },
                ..
            })
        ));
    }

    #[test]
    fn conventional_rule_accepts_extra_history() {
        let mut university = university().with_eligibility(EligibilityRule::PrerequisitesCompleted);
        university.add_course(course("ART100"));
        university.add_student(student(3, &["CS101", "ART100"]));

        assert!(
            university
                .enroll_student_in_course(id(3), &code("CS102"))
                .is_ok()
        );
        assert_symmetric(&university);
    }

    #[test]
    fn open_course_accepts_anyone() {
        let mut university = university();
        university.add_student(student(4, &[]));

        university
            .enroll_student_in_course(id(4), &code("CS101"))
            .unwrap();
        assert!(university.student(id(4)).unwrap().is_enrolled_in(&code("CS101")));
        assert_symmetric(&university);
    }

    #[test]
    fn enroll_unknown_keys_fails() {
        let mut university = university();
        university.add_student(student(1, &[]));

        assert_eq!(
            university.enroll_student_in_course(id(9), &code("CS101")),
            Err(EnrollError::StudentNotFound(id(9)))
        );
        assert_eq!(
            university.enroll_student_in_course(id(1), &code("NOPE")),
            Err(EnrollError::CourseNotFound(code("NOPE")))
        );
    }

    #[test]
    fn check_eligibility_does_not_enroll() {
        let mut university = university();
        university.add_student(student(1, &["CS101"]));

        assert!(university.check_eligibility(id(1), &code("CS102")).is_ok());
        assert!(university.student(id(1)).unwrap().enrolled_courses().is_empty());
    }

    #[test]
    fn drop_removes_both_sides() {
        let mut university = university();
        university.add_student(student(1, &[]));
        university
            .enroll_student_in_course(id(1), &code("CS101"))
            .unwrap();

        university
            .remove_student_from_course(id(1), &code("CS101"))
            .unwrap();
        assert!(university.student(id(1)).unwrap().enrolled_courses().is_empty());
        assert!(university.course("CS101").unwrap().enrolled_students().is_empty());

        assert_eq!(
            university.remove_student_from_course(id(1), &code("CS101")),
            Err(EnrollError::NotEnrolled {
                student: id(1),
                course: code("CS101"),
            })
        );
    }

    #[test]
    fn drop_with_unknown_keys_fails_without_panicking() {
        let mut university = university();
        university.add_student(student(1, &[]));

        assert_eq!(
            university.remove_student_from_course(id(1), &code("NOPE")),
            Err(EnrollError::CourseNotFound(code("NOPE")))
        );
        assert_eq!(
            university.remove_student_from_course(id(7), &code("CS101")),
            Err(EnrollError::StudentNotFound(id(7)))
        );
    }

    #[test]
    fn add_previous_course_records_history() {
        let mut university = university();
        university.add_student(student(1, &[]));

        assert_eq!(university.add_previous_course(id(1), &code("CS101")), Ok(true));
        assert_eq!(university.add_previous_course(id(1), &code("CS101")), Ok(false));
        assert_eq!(
            university.add_previous_course(id(1), &code("NOPE")),
            Err(EnrollError::CourseNotFound(code("NOPE")))
        );

        assert!(
            university
                .enroll_student_in_course(id(1), &code("CS102"))
                .is_ok()
        );
    }

    #[test]
    fn removing_student_cascades_to_courses() {
        let mut university = university();
        university.add_student(student(1, &["CS101"]));
        university.add_student(student(2, &[]));
        university
            .enroll_student_in_course(id(1), &code("CS101"))
            .unwrap();
        university
            .enroll_student_in_course(id(1), &code("CS102"))
            .unwrap();
        university
            .enroll_student_in_course(id(2), &code("CS101"))
            .unwrap();

        assert!(university.remove_student_from_university(id(1)));
        assert!(!university.remove_student_from_university(id(1)));

        assert!(university.student(id(1)).is_none());
        for course in university.courses() {
            assert!(!course.enrolled_students().contains(&id(1)));
        }
        assert!(
            university
                .course("CS101")
                .unwrap()
                .enrolled_students()
                .contains(&id(2))
        );
        assert_symmetric(&university);
    }

    #[test]
    fn removing_course_cascades_and_unlocks_dependents() {
        let mut university = university();
        university.add_student(student(1, &[]));
        university
            .enroll_student_in_course(id(1), &code("CS101"))
            .unwrap();

        assert!(university.remove_course_from_university(&code("CS101")));
        assert!(!university.remove_course_from_university(&code("CS101")));

        assert!(university.course("CS101").is_none());
        assert!(university.course("CS102").unwrap().prerequisites().is_empty());
        assert!(university.student(id(1)).unwrap().enrolled_courses().is_empty());

        // CS102 has no prerequisites left, so a fresh student can now join.
        university.add_student(student(5, &[]));
        assert!(
            university
                .enroll_student_in_course(id(5), &code("CS102"))
                .is_ok()
        );
        assert_symmetric(&university);
    }

    #[test]
    fn removed_course_is_struck_from_history() {
        let mut university = university();
        university.add_student(student(1, &["CS101"]));

        assert!(university.remove_course_from_university(&code("CS101")));
        assert!(university.student(id(1)).unwrap().previous_courses().is_empty());

        // A new CS101 is a different course: completing the old one counts
        // for nothing.
        assert!(university.add_course(course("CS101")));
        university
            .add_requisite_to_course(&code("CS102"), &code("CS101"))
            .unwrap();
        assert_eq!(
            university.enroll_student_in_course(id(1), &code("CS102")),
            Err(EnrollError::Ineligible {
                student: id(1),
                course: code("CS102"),
                reason: Ineligible::NoCompletedCourses,
            })
        );
    }

    #[test]
    fn add_by_name_creates_fresh_records() {
        let mut university = University::default();

        assert!(university.add_student_named("Ada", id(1)));
        assert!(!university.add_student_named("Grace", id(1)));
        assert!(university.add_course_named("Intro", code("CS101")));
        assert!(!university.add_course_named("Again", code("CS101")));

        let student = university.student(id(1)).unwrap();
        assert_eq!(student.name(), "Ada");
        assert!(student.previous_courses().is_empty());

        let course = university.course("CS101").unwrap();
        assert_eq!(course.name(), "Intro");
        assert!(course.prerequisites().is_empty());
    }

    #[test]
    fn with_eligibility_replaces_the_rule() {
        let university = University::new("Example", "Lux")
            .with_eligibility(EligibilityRule::PrerequisitesCompleted);
        assert_eq!(university.eligibility(), EligibilityRule::PrerequisitesCompleted);
        assert_eq!(
            University::default().eligibility(),
            EligibilityRule::CompletedSubsetOfPrerequisites
        );
    }

    #[test]
    fn symmetry_holds_across_mixed_operations() {
        let mut university = university();
        university.add_course(course("MATH101"));
        for value in 1..=6 {
            university.add_student(student(value, &["CS101"]));
        }

        for value in 1..=6 {
            let _ = university.enroll_student_in_course(id(value), &code("CS101"));
            let _ = university.enroll_student_in_course(id(value), &code("CS102"));
            let _ = university.enroll_student_in_course(id(value), &code("MATH101"));
            assert_symmetric(&university);
        }

        let _ = university.remove_student_from_course(id(2), &code("CS102"));
        assert_symmetric(&university);
        university.remove_student_from_university(id(3));
        assert_symmetric(&university);
        university.remove_course_from_university(&code("MATH101"));
        assert_symmetric(&university);
        let _ = university.enroll_student_in_course(id(2), &code("CS102"));
        assert_symmetric(&university);
    }

    #[test]
    fn cycles_are_allowed_and_reported() {
        let mut university = university();
        university.add_course(course("CS103"));

        assert!(!university.has_prerequisite_cycles());

        university
            .add_requisite_to_course(&code("CS101"), &code("CS102"))
            .unwrap();
        university
            .add_requisite_to_course(&code("CS103"), &code("CS103"))
            .unwrap();

        assert_eq!(
            university.prerequisite_cycles(),
            vec![vec![code("CS101"), code("CS102")], vec![code("CS103")]]
        );
    }

    #[test]
    fn display_summarises_university() {
        let mut university = university();
        university.add_student(student(1, &[]));

        assert_eq!(
            university.to_string(),
            "Example (Lux et veritas)\nNumber of Students: 1\nNumber of Courses 2"
        );
    }
}
