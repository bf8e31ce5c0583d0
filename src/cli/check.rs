use std::process;

use clap::Parser;
use registrar::{CourseCode, EnrollError, StudentId, University};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check whether a student may enroll in a course")]
pub struct Check {
    /// The student's ID
    student: StudentId,

    /// The course code
    #[clap(value_parser = super::parse_course_code)]
    course: CourseCode,
}

impl Check {
    #[instrument(level = "debug", skip(university))]
    pub fn run(self, university: &University) -> anyhow::Result<()> {
        match university.check_eligibility(self.student, &self.course) {
            Ok(()) => {
                let already = university
                    .student(self.student)
                    .is_some_and(|student| student.is_enrolled_in(&self.course));
                let message = if already {
                    format!("Student {} is already enrolled in {}", self.student, self.course)
                } else {
                    format!("Student {} may enroll in {}", self.student, self.course)
                };
                println!("{}", message.success());
                Ok(())
            }
            Err(e @ EnrollError::Ineligible { .. }) => {
                println!("{}", e.to_string().warning());
                process::exit(1);
            }
            Err(e) => Err(e.into()),
        }
    }
}
