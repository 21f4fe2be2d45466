//! Core data-access layer for staff records.
//! Maps departments, employees and their reviews onto SQLite tables.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{DbLocation, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::department::{Department, DepartmentId};
pub use model::employee::{Employee, EmployeeId, EmployeeRow};
pub use model::review::{Review, ReviewId, ReviewRow};
pub use model::ValidationError;
pub use repo::department_repo::DepartmentRepository;
pub use repo::employee_repo::{EmployeeHandle, EmployeeRepository};
pub use repo::identity_map::{shared, IdentityMap, Shared};
pub use repo::lookup::{DepartmentLookup, EmployeeLookup, ReviewSource};
pub use repo::review_repo::{ReviewHandle, ReviewRepository};
pub use repo::{RepoError, RepoResult};
pub use service::staff_service::StaffService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
