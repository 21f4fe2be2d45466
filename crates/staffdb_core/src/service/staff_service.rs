//! Staff use-case service.
//!
//! # Responsibility
//! - Own the department, employee and review repositories for one
//!   connection, together with their identity maps.
//! - Create and drop the schema in dependency order.
//!
//! # Invariants
//! - Identity maps live exactly as long as this service; dropping it forgets
//!   every tracked instance.

use crate::db::schema;
use crate::model::department::{Department, DepartmentId};
use crate::model::employee::EmployeeId;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::{EmployeeHandle, EmployeeRepository};
use crate::repo::review_repo::{ReviewHandle, ReviewRepository};
use crate::repo::RepoResult;
use log::info;
use rusqlite::Connection;

pub struct StaffService<'conn> {
    departments: DepartmentRepository<'conn>,
    employees: EmployeeRepository<'conn>,
    reviews: ReviewRepository<'conn>,
}

impl<'conn> StaffService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            departments: DepartmentRepository::new(conn),
            employees: EmployeeRepository::new(conn),
            reviews: ReviewRepository::new(conn),
        }
    }

    /// Creates all tables. Safe to repeat.
    pub fn create_schema(&self) -> RepoResult<()> {
        self.departments.create_table()?;
        self.employees.create_table()?;
        self.reviews.create_table()?;
        Ok(())
    }

    /// Drops all tables, dependents first, and forgets tracked instances.
    pub fn drop_schema(&self) -> RepoResult<()> {
        self.reviews.drop_table()?;
        self.employees.drop_table()?;
        self.departments.drop_table()?;
        info!(
            "event=schema_reset module=service status=ok tables={}",
            schema::ALL_TABLES.len()
        );
        Ok(())
    }

    pub fn add_department(&self, name: &str, location: &str) -> RepoResult<Department> {
        self.departments.create(name, location)
    }

    /// Creates an employee, checking the department against this store.
    pub fn hire(
        &self,
        name: &str,
        title: &str,
        department_id: DepartmentId,
    ) -> RepoResult<EmployeeHandle> {
        self.employees
            .create(name, title, department_id, &self.departments)
    }

    /// Creates a review, checking the employee against this store.
    pub fn add_review(
        &self,
        year: i64,
        summary: &str,
        employee_id: EmployeeId,
    ) -> RepoResult<ReviewHandle> {
        self.reviews
            .create(year, summary, employee_id, &self.employees)
    }

    pub fn employee_reviews(&self, employee: &EmployeeHandle) -> RepoResult<Vec<ReviewHandle>> {
        employee.borrow().reviews(&self.reviews)
    }

    /// Deletes an employee. Reviews referencing it are left in place.
    pub fn dismiss(&self, employee: &EmployeeHandle) -> RepoResult<()> {
        self.employees.delete(employee)
    }

    pub fn departments(&self) -> &DepartmentRepository<'conn> {
        &self.departments
    }

    pub fn employees(&self) -> &EmployeeRepository<'conn> {
        &self.employees
    }

    pub fn reviews(&self) -> &ReviewRepository<'conn> {
        &self.reviews
    }
}
