//! Employee domain model.
//!
//! # Invariants
//! - `name` and `title` are trimmed and never empty.
//! - `department_id` matched an existing department when it was assigned.
//! - `id` is only set by the repository after an insert or a load.

use crate::model::department::DepartmentId;
use crate::model::validation::{non_empty_trimmed, ValidationError};
use crate::repo::lookup::{DepartmentLookup, ReviewSource};
use crate::repo::review_repo::ReviewHandle;
use crate::repo::RepoResult;
use serde::Serialize;

pub type EmployeeId = i64;

const ENTITY: &str = "employee";

/// One staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: Option<EmployeeId>,
    name: String,
    title: String,
    department_id: DepartmentId,
}

/// Raw `employees` row, column for column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    pub title: String,
    pub department_id: DepartmentId,
}

impl Employee {
    /// Builds a transient employee.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a text field is blank or the department
    ///   does not exist.
    /// - `RepoError::Db` when the department lookup itself fails.
    pub fn new(
        name: &str,
        title: &str,
        department_id: DepartmentId,
        departments: &impl DepartmentLookup,
    ) -> RepoResult<Self> {
        let name = non_empty_trimmed(ENTITY, "name", name)?;
        let title = non_empty_trimmed(ENTITY, "title", title)?;
        ensure_department(department_id, departments)?;

        Ok(Self {
            id: None,
            name,
            title,
            department_id,
        })
    }

    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Returns whether this employee has a row in the store.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Reviews written for this employee. A transient employee has none.
    pub fn reviews(&self, source: &impl ReviewSource) -> RepoResult<Vec<ReviewHandle>> {
        match self.id {
            Some(id) => source.reviews_for_employee(id),
            None => Ok(Vec::new()),
        }
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = non_empty_trimmed(ENTITY, "name", name)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = non_empty_trimmed(ENTITY, "title", title)?;
        Ok(())
    }

    /// Reassigns the department. The current value is kept on failure.
    pub fn set_department_id(
        &mut self,
        department_id: DepartmentId,
        departments: &impl DepartmentLookup,
    ) -> RepoResult<()> {
        ensure_department(department_id, departments)?;
        self.department_id = department_id;
        Ok(())
    }

    /// Builds a persisted instance from a stored row.
    ///
    /// Text fields are re-validated; the department reference is not, since
    /// referential checks apply to assignment, not to rows already stored.
    pub(crate) fn from_row(row: EmployeeRow) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Some(row.id),
            name: non_empty_trimmed(ENTITY, "name", &row.name)?,
            title: non_empty_trimmed(ENTITY, "title", &row.title)?,
            department_id: row.department_id,
        })
    }

    /// Overwrites cached fields with a fresher copy of the same row.
    /// Leaves `self` untouched when the row fails validation.
    pub(crate) fn refresh_from_row(&mut self, row: EmployeeRow) -> Result<(), ValidationError> {
        let fresh = Self::from_row(row)?;
        *self = fresh;
        Ok(())
    }

    pub(crate) fn set_id(&mut self, id: Option<EmployeeId>) {
        self.id = id;
    }
}

fn ensure_department(
    department_id: DepartmentId,
    departments: &impl DepartmentLookup,
) -> RepoResult<()> {
    if !departments.department_exists(department_id)? {
        return Err(ValidationError::UnknownDepartment(department_id).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeRow};
    use crate::model::department::DepartmentId;
    use crate::model::ValidationError;
    use crate::repo::lookup::DepartmentLookup;
    use crate::repo::{RepoError, RepoResult};

    struct KnownDepartments(&'static [DepartmentId]);

    impl DepartmentLookup for KnownDepartments {
        fn department_exists(&self, id: DepartmentId) -> RepoResult<bool> {
            Ok(self.0.contains(&id))
        }
    }

    #[test]
    fn new_trims_fields_and_starts_transient() {
        let employee =
            Employee::new("  Ada Lovelace ", " Engineer", 1, &KnownDepartments(&[1])).unwrap();

        assert_eq!(employee.id(), None);
        assert!(!employee.is_persisted());
        assert_eq!(employee.name(), "Ada Lovelace");
        assert_eq!(employee.title(), "Engineer");
        assert_eq!(employee.department_id(), 1);
    }

    #[test]
    fn new_rejects_unknown_department() {
        let err = Employee::new("Ada", "Engineer", 9, &KnownDepartments(&[1])).unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::UnknownDepartment(9))
        ));
    }

    #[test]
    fn failed_setters_keep_previous_values() {
        let departments = KnownDepartments(&[1, 2]);
        let mut employee = Employee::new("Ada", "Engineer", 1, &departments).unwrap();

        assert!(employee.set_name("   ").is_err());
        assert!(employee.set_department_id(7, &departments).is_err());
        assert_eq!(employee.name(), "Ada");
        assert_eq!(employee.department_id(), 1);

        employee.set_department_id(2, &departments).unwrap();
        assert_eq!(employee.department_id(), 2);
    }

    #[test]
    fn refresh_from_invalid_row_is_rejected_without_changes() {
        let row = EmployeeRow {
            id: 4,
            name: "Grace".to_string(),
            title: "Admiral".to_string(),
            department_id: 1,
        };
        let mut employee = Employee::from_row(row.clone()).unwrap();

        let err = employee
            .refresh_from_row(EmployeeRow {
                title: String::new(),
                ..row
            })
            .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { field: "title", .. }));
        assert_eq!(employee.title(), "Admiral");
        assert_eq!(employee.id(), Some(4));
    }
}
