use clap::{Parser, Subcommand, ValueEnum};
use registrar::{Course, CourseCode, Student, StudentId, University};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display detailed information about a student or a course")]
pub struct Show {
    #[command(subcommand)]
    target: Target,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty", global = true)]
    output: OutputFormat,
}

#[derive(Debug, Subcommand)]
enum Target {
    /// Show a student
    Student {
        /// The student's ID
        id: StudentId,
    },
    /// Show a course
    Course {
        /// The course code
        #[clap(value_parser = super::parse_course_code)]
        code: CourseCode,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(university))]
    pub fn run(self, university: &University) -> anyhow::Result<()> {
        match self.target {
            Target::Student { id } => {
                let Some(student) = university.student(id) else {
                    anyhow::bail!("Student {id} not found");
                };
                match self.output {
                    OutputFormat::Pretty => output_student(university, student),
                    OutputFormat::Json => student_json(student)?,
                }
            }
            Target::Course { code } => {
                let Some(course) = university.course(&code) else {
                    anyhow::bail!("Course {code} not found");
                };
                match self.output {
                    OutputFormat::Pretty => output_course(university, course),
                    OutputFormat::Json => course_json(course)?,
                }
            }
        }
        Ok(())
    }
}

fn course_label(university: &University, code: &CourseCode) -> String {
    let name = university
        .course(code)
        .map_or_else(|| "(not offered)".to_string(), |course| course.name().to_string());
    format!("{code} {}", name.dim())
}

fn output_student(university: &University, student: &Student) {
    println!("# {} {}", student.id(), student.name());

    println!("\n{}", "Enrolled".dim());
    if student.enrolled_courses().is_empty() {
        println!("  (none)");
    }
    for code in student.enrolled_courses() {
        println!("  • {}", course_label(university, code));
    }

    println!("\n{}", "Completed".dim());
    if student.previous_courses().is_empty() {
        println!("  (none)");
    }
    for code in student.previous_courses() {
        println!("  • {}", course_label(university, code));
    }
}

fn output_course(university: &University, course: &Course) {
    println!("# {} {}", course.code(), course.name());

    if !course.prerequisites().is_empty() {
        println!("\n{}", "Prerequisites".dim());
        for code in course.prerequisites() {
            println!("  • {}", course_label(university, code));
        }
    }

    let dependents: Vec<_> = university
        .courses()
        .filter(|other| other.prerequisites().contains(course.code()))
        .collect();
    if !dependents.is_empty() {
        println!("\n{}", "Required by".dim());
        for other in dependents {
            println!("  • {} {}", other.code(), other.name().dim());
        }
    }

    println!("\n{}", "Students".dim());
    if course.enrolled_students().is_empty() {
        println!("  (none)");
    }
    for id in course.enrolled_students() {
        let name = university
            .student(*id)
            .map_or_else(String::new, |student| student.name().dim());
        println!("  • {id} {name}");
    }
}

fn student_json(student: &Student) -> anyhow::Result<()> {
    use serde_json::json;

    let output = json!({
        "id": student.id(),
        "name": student.name(),
        "enrolled": student.enrolled_courses(),
        "completed": student.previous_courses(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn course_json(course: &Course) -> anyhow::Result<()> {
    use serde_json::json;

    let output = json!({
        "code": course.code(),
        "name": course.name(),
        "prerequisites": course.prerequisites(),
        "students": course.enrolled_students(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
