//! Narrow capabilities entities need from other repositories.
//!
//! Models validate foreign keys and employees list their reviews through
//! these traits, so `Employee` and `Review` never depend on each other's
//! repository type.

use crate::model::department::DepartmentId;
use crate::model::employee::EmployeeId;
use crate::repo::review_repo::ReviewHandle;
use crate::repo::RepoResult;

/// Existence check for `employees.department_id`.
pub trait DepartmentLookup {
    fn department_exists(&self, id: DepartmentId) -> RepoResult<bool>;
}

/// Existence check for `reviews.employee_id`.
pub trait EmployeeLookup {
    fn employee_exists(&self, id: EmployeeId) -> RepoResult<bool>;
}

/// Loads the reviews written for one employee.
pub trait ReviewSource {
    fn reviews_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<ReviewHandle>>;
}
