//! Per-repository identity map.
//!
//! # Invariants
//! - At most one `Shared<T>` is registered per primary key.
//! - The map is single-threaded (`Rc`/`RefCell`); it lives as long as the
//!   repository that owns it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared, mutable handle to a tracked entity.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a transient entity so it can be saved and tracked.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

#[derive(Debug)]
pub struct IdentityMap<T> {
    entries: RefCell<HashMap<i64, Shared<T>>>,
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T> IdentityMap<T> {
    pub fn get(&self, id: i64) -> Option<Shared<T>> {
        self.entries.borrow().get(&id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    /// Registers `handle` under `id`, replacing any previous entry.
    pub fn insert(&self, id: i64, handle: Shared<T>) {
        self.entries.borrow_mut().insert(id, handle);
    }

    pub fn remove(&self, id: i64) -> Option<Shared<T>> {
        self.entries.borrow_mut().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Forgets every tracked instance. Handles held by callers stay valid.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
