use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// A student's identification number.
///
/// Valid IDs lie in the range `0..=999_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StudentId(u32);

impl StudentId {
    /// The largest valid student ID.
    pub const MAX: u32 = 999_999;

    /// Creates a new `StudentId`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStudentId::OutOfRange`] if the value is greater than
    /// [`StudentId::MAX`].
    pub const fn new(value: u32) -> Result<Self, InvalidStudentId> {
        if value > Self::MAX {
            return Err(InvalidStudentId::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for StudentId {
    type Error = InvalidStudentId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentId> for u32 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl FromStr for StudentId {
    type Err = InvalidStudentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidStudentId::Syntax(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when constructing a [`StudentId`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidStudentId {
    /// The value is not a non-negative integer.
    #[error("Invalid student ID '{0}': expected an integer")]
    Syntax(String),

    /// The value is outside `0..=999999`.
    #[error("Invalid student ID {0}: must be between 0 and 999999")]
    OutOfRange(u32),
}

/// A course code, such as `CS101`.
///
/// Codes are non-empty and contain no whitespace. They are stored in
/// uppercase, so `cs101` and `CS101` name the same course.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(NonEmptyString);

impl CourseCode {
    /// Creates a new `CourseCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCourseCode` if the string is empty or contains
    /// whitespace.
    pub fn new(s: String) -> Result<Self, InvalidCourseCode> {
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidCourseCode(s));
        }
        let non_empty = NonEmptyString::new(s.to_uppercase()).map_err(InvalidCourseCode)?;
        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for CourseCode {
    type Error = InvalidCourseCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CourseCode {
    type Error = InvalidCourseCode;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0.as_str().to_owned()
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for CourseCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for CourseCode {
    type Err = InvalidCourseCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when a string is not a valid course code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid course code '{0}': must be non-empty and contain no whitespace")]
pub struct InvalidCourseCode(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_id_accepts_bounds() {
        assert_eq!(StudentId::new(0).unwrap().get(), 0);
        assert_eq!(StudentId::new(999_999).unwrap().get(), 999_999);
    }

    #[test]
    fn student_id_rejects_out_of_range() {
        assert_eq!(
            StudentId::new(1_000_000),
            Err(InvalidStudentId::OutOfRange(1_000_000))
        );
    }

    #[test]
    fn student_id_parses_decimal() {
        let id: StudentId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");

        assert!(matches!(
            "-1".parse::<StudentId>(),
            Err(InvalidStudentId::Syntax(_))
        ));
    }

    #[test]
    fn course_code_rejects_empty_and_whitespace() {
        assert!(CourseCode::try_from("").is_err());
        assert!(CourseCode::try_from("CS 101").is_err());
        assert_eq!(CourseCode::try_from("CS101").unwrap().as_str(), "CS101");
    }

    #[test]
    fn course_code_is_uppercased() {
        assert_eq!(CourseCode::try_from("cs101").unwrap().as_str(), "CS101");
        assert_eq!(
            "Math-2b".parse::<CourseCode>().unwrap(),
            CourseCode::try_from("MATH-2B").unwrap()
        );

        let code: CourseCode = serde_yaml::from_str("cs102").unwrap();
        assert_eq!(code.as_str(), "CS102");
    }

    #[test]
    fn ids_deserialize_with_validation() {
        let code: CourseCode = serde_yaml::from_str("CS101").unwrap();
        assert_eq!(code.as_str(), "CS101");

        let id: StudentId = serde_yaml::from_str("7").unwrap();
        assert_eq!(id.get(), 7);

        assert!(serde_yaml::from_str::<StudentId>("1000000").is_err());
    }
}
