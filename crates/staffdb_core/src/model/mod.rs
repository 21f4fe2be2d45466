//! Domain model for departments, employees and performance reviews.
//!
//! # Responsibility
//! - Define validated value types mirroring one row of each table.
//! - Enforce field constraints at construction and on every setter.
//!
//! # Invariants
//! - Fields are private; a value that exists has passed validation.
//! - `id == None` marks a transient entity that was never saved.
//! - Foreign keys are checked against their lookup at assignment time.
//!
//! # Export format
//! Entities derive `Serialize` as the crate's public JSON shape: one key per
//! column (`id`, `name`, `department_id`, ...), with `id: null` for transient
//! entities. Callers exporting records should rely on these names.

pub mod department;
pub mod employee;
pub mod review;
pub mod validation;

pub use validation::ValidationError;
