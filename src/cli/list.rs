use clap::{Parser, Subcommand, ValueEnum};
use registrar::{Course, CourseCode, Student, University};
use serde::Serialize;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser)]
#[command(about = "List students or courses")]
pub struct List {
    #[command(subcommand)]
    target: Target,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress headers
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Target {
    /// All students, by ID
    Students,
    /// All courses, by code
    Courses,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct StudentRow<'a> {
    id: u32,
    name: &'a str,
    enrolled: Vec<&'a str>,
    completed: Vec<&'a str>,
}

impl<'a> From<&'a Student> for StudentRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: student.id().get(),
            name: student.name(),
            enrolled: student.enrolled_courses().iter().map(CourseCode::as_str).collect(),
            completed: student.previous_courses().iter().map(CourseCode::as_str).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CourseRow<'a> {
    code: &'a str,
    name: &'a str,
    prerequisites: Vec<&'a str>,
    students: usize,
}

impl<'a> From<&'a Course> for CourseRow<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            code: course.code().as_str(),
            name: course.name(),
            prerequisites: course.prerequisites().iter().map(CourseCode::as_str).collect(),
            students: course.enrolled_students().len(),
        }
    }
}

impl List {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, university: &University) -> anyhow::Result<()> {
        match self.target {
            Target::Students => {
                let rows: Vec<StudentRow> = university.students().map(Into::into).collect();
                match self.output {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                    OutputFormat::Table => render_students(&rows, self.quiet),
                }
            }
            Target::Courses => {
                let rows: Vec<CourseRow> = university.courses().map(Into::into).collect();
                match self.output {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                    OutputFormat::Table => render_courses(&rows, self.quiet),
                }
            }
        }
        Ok(())
    }
}

fn render_students(rows: &[StudentRow], quiet: bool) {
    if rows.is_empty() {
        if !quiet {
            println!("{}", "No students.".dim());
        }
        return;
    }

    if is_narrow() {
        for row in rows {
            println!("{:>6}  {}", row.id, row.name);
        }
        return;
    }

    if !quiet {
        println!(
            "{}",
            format!("{:>6}  {:<24}  {:<24}  {}", "ID", "NAME", "ENROLLED", "COMPLETED").info()
        );
    }
    for row in rows {
        println!(
            "{:>6}  {:<24}  {:<24}  {}",
            row.id,
            row.name,
            row.enrolled.join(","),
            row.completed.join(",")
        );
    }
}

fn render_courses(rows: &[CourseRow], quiet: bool) {
    if rows.is_empty() {
        if !quiet {
            println!("{}", "No courses.".dim());
        }
        return;
    }

    if is_narrow() {
        for row in rows {
            println!("{:<10}  {}", row.code, row.name);
        }
        return;
    }

    if !quiet {
        println!(
            "{}",
            format!(
                "{:<10}  {:<32}  {:<24}  {}",
                "CODE", "NAME", "PREREQUISITES", "STUDENTS"
            )
            .info()
        );
    }
    for row in rows {
        println!(
            "{:<10}  {:<32}  {:<24}  {}",
            row.code,
            row.name,
            row.prerequisites.join(","),
            row.students
        );
    }
}
