//! Department value type.
//!
//! Departments only exist here so employees have something to reference;
//! they carry no identity map.

use crate::model::validation::{non_empty_trimmed, ValidationError};
use serde::Serialize;

pub type DepartmentId = i64;

const ENTITY: &str = "department";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    id: Option<DepartmentId>,
    name: String,
    location: String,
}

impl Department {
    /// Builds a transient department after validating both text fields.
    pub fn new(name: &str, location: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: non_empty_trimmed(ENTITY, "name", name)?,
            location: non_empty_trimmed(ENTITY, "location", location)?,
        })
    }

    pub fn id(&self) -> Option<DepartmentId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub(crate) fn with_id(mut self, id: DepartmentId) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }
}
