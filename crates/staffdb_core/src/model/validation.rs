//! Field validation shared by all entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Earliest review year accepted by `Review`.
pub const MIN_REVIEW_YEAR: i64 = 2000;

/// A field failed its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field is empty after trimming.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// Review year is before `MIN_REVIEW_YEAR`.
    YearOutOfRange { year: i64 },
    /// `department_id` does not match any stored department.
    UnknownDepartment(i64),
    /// `employee_id` does not match any stored employee.
    UnknownEmployee(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must be a non-empty string")
            }
            Self::YearOutOfRange { year } => write!(
                f,
                "review year must be an integer >= {MIN_REVIEW_YEAR}, got {year}"
            ),
            Self::UnknownDepartment(id) => write!(f, "no department with id={id} exists"),
            Self::UnknownEmployee(id) => write!(f, "no employee with id={id} exists"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn non_empty_trimmed(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn review_year(year: i64) -> Result<i64, ValidationError> {
    if year < MIN_REVIEW_YEAR {
        return Err(ValidationError::YearOutOfRange { year });
    }
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::{non_empty_trimmed, review_year, ValidationError};

    #[test]
    fn non_empty_trimmed_strips_whitespace() {
        assert_eq!(
            non_empty_trimmed("employee", "name", "  Ada  ").unwrap(),
            "Ada"
        );
        assert_eq!(
            non_empty_trimmed("employee", "title", " \t\n").unwrap_err(),
            ValidationError::EmptyField {
                entity: "employee",
                field: "title"
            }
        );
    }

    #[test]
    fn review_year_boundary() {
        assert_eq!(review_year(2000).unwrap(), 2000);
        assert_eq!(
            review_year(1999).unwrap_err(),
            ValidationError::YearOutOfRange { year: 1999 }
        );
    }
}
