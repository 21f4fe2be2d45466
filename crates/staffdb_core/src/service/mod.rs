//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Bundle repositories that share one connection into a unit of work.
//! - Supply the lookups each entity needs, so callers do not wire them.

pub mod staff_service;
