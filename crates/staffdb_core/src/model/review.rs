//! Performance review domain model.
//!
//! # Invariants
//! - `year >= MIN_REVIEW_YEAR`.
//! - `summary` is trimmed and never empty.
//! - `employee_id` matched an existing employee when it was assigned.

use crate::model::employee::EmployeeId;
use crate::model::validation::{non_empty_trimmed, review_year, ValidationError};
use crate::repo::lookup::EmployeeLookup;
use crate::repo::RepoResult;
use serde::Serialize;

pub type ReviewId = i64;

const ENTITY: &str = "review";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: Option<ReviewId>,
    year: i64,
    summary: String,
    employee_id: EmployeeId,
}

/// Raw `reviews` row, column for column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub id: ReviewId,
    pub year: i64,
    pub summary: String,
    pub employee_id: EmployeeId,
}

impl Review {
    /// Builds a transient review for an existing employee.
    pub fn new(
        year: i64,
        summary: &str,
        employee_id: EmployeeId,
        employees: &impl EmployeeLookup,
    ) -> RepoResult<Self> {
        let year = review_year(year)?;
        let summary = non_empty_trimmed(ENTITY, "summary", summary)?;
        ensure_employee(employee_id, employees)?;

        Ok(Self {
            id: None,
            year,
            summary,
            employee_id,
        })
    }

    pub fn id(&self) -> Option<ReviewId> {
        self.id
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_year(&mut self, year: i64) -> Result<(), ValidationError> {
        self.year = review_year(year)?;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: &str) -> Result<(), ValidationError> {
        self.summary = non_empty_trimmed(ENTITY, "summary", summary)?;
        Ok(())
    }

    pub fn set_employee_id(
        &mut self,
        employee_id: EmployeeId,
        employees: &impl EmployeeLookup,
    ) -> RepoResult<()> {
        ensure_employee(employee_id, employees)?;
        self.employee_id = employee_id;
        Ok(())
    }

    pub(crate) fn from_row(row: ReviewRow) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Some(row.id),
            year: review_year(row.year)?,
            summary: non_empty_trimmed(ENTITY, "summary", &row.summary)?,
            employee_id: row.employee_id,
        })
    }

    pub(crate) fn refresh_from_row(&mut self, row: ReviewRow) -> Result<(), ValidationError> {
        *self = Self::from_row(row)?;
        Ok(())
    }

    pub(crate) fn set_id(&mut self, id: Option<ReviewId>) {
        self.id = id;
    }
}

fn ensure_employee(employee_id: EmployeeId, employees: &impl EmployeeLookup) -> RepoResult<()> {
    if !employees.employee_exists(employee_id)? {
        return Err(ValidationError::UnknownEmployee(employee_id).into());
    }
    Ok(())
}
