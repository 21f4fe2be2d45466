//! Employee repository over the `employees` table.
//!
//! # Responsibility
//! - Map employee CRUD onto single SQL statements.
//! - Route every loaded row through `instance_from_db` so each id has one
//!   live `EmployeeHandle`.
//!
//! # Invariants
//! - A handle is registered in the identity map exactly when its id is set
//!   by this repository (insert or load) and removed on delete.
//! - A tracked handle that is borrowed while its row is reloaded keeps its
//!   cached fields; the reload never panics.

use crate::db::schema::{self, EMPLOYEES};
use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId, EmployeeRow};
use crate::repo::identity_map::{shared, IdentityMap, Shared};
use crate::repo::lookup::{DepartmentLookup, EmployeeLookup};
use crate::repo::{invalid_row, RepoError, RepoResult};
use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::rc::Rc;

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, title, department_id FROM employees";

/// Live, identity-mapped employee instance.
pub type EmployeeHandle = Shared<Employee>;

pub struct EmployeeRepository<'conn> {
    conn: &'conn Connection,
    identity: IdentityMap<Employee>,
}

impl<'conn> EmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            identity: IdentityMap::default(),
        }
    }

    pub fn create_table(&self) -> RepoResult<()> {
        schema::create_table(self.conn, EMPLOYEES)?;
        Ok(())
    }

    /// Drops the table. Tracked handles are forgotten, not invalidated.
    pub fn drop_table(&self) -> RepoResult<()> {
        schema::drop_table(self.conn, EMPLOYEES)?;
        self.identity.clear();
        Ok(())
    }

    /// Inserts a transient employee or updates a persisted one.
    ///
    /// On insert the store-assigned id is written back into the handle and
    /// the handle is registered in the identity map.
    pub fn save(&self, employee: &EmployeeHandle) -> RepoResult<EmployeeHandle> {
        if employee.borrow().is_persisted() {
            return self.update(employee);
        }

        let id = {
            let current = employee.borrow();
            self.conn.execute(
                "INSERT INTO employees (name, title, department_id) VALUES (?1, ?2, ?3);",
                params![current.name(), current.title(), current.department_id()],
            )?;
            self.conn.last_insert_rowid()
        };

        employee.borrow_mut().set_id(Some(id));
        self.identity.insert(id, Rc::clone(employee));
        info!("event=employee_insert module=repo status=ok id={id}");
        Ok(Rc::clone(employee))
    }

    /// Validates a new employee and saves it.
    pub fn create(
        &self,
        name: &str,
        title: &str,
        department_id: DepartmentId,
        departments: &impl DepartmentLookup,
    ) -> RepoResult<EmployeeHandle> {
        let employee = Employee::new(name, title, department_id, departments)?;
        self.save(&shared(employee))
    }

    /// Returns the tracked instance for `row.id`, refreshed from `row`, or
    /// builds and tracks a new one.
    ///
    /// When the caller still holds a borrow of the tracked instance the
    /// refresh is skipped and the instance is returned as it is.
    pub fn instance_from_db(&self, row: EmployeeRow) -> RepoResult<EmployeeHandle> {
        let id = row.id;
        if let Some(existing) = self.identity.get(id) {
            match existing.try_borrow_mut() {
                Ok(mut current) => {
                    current
                        .refresh_from_row(row)
                        .map_err(|err| invalid_row(EMPLOYEES.name, id, err))?;
                    debug!("event=identity_hit module=repo entity=employee id={id}");
                }
                Err(_) => {
                    warn!("event=identity_hit module=repo entity=employee status=busy id={id}");
                }
            }
            return Ok(existing);
        }

        let employee =
            Employee::from_row(row).map_err(|err| invalid_row(EMPLOYEES.name, id, err))?;
        let handle = shared(employee);
        self.identity.insert(id, Rc::clone(&handle));
        Ok(handle)
    }

    pub fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<EmployeeHandle>> {
        let row = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_employee_row,
            )
            .optional()?;
        row.map(|row| self.instance_from_db(row)).transpose()
    }

    /// Exact-match lookup. With duplicate names the first row SQLite yields
    /// wins; no ordering is imposed.
    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<EmployeeHandle>> {
        let row = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE name = ?1 LIMIT 1;"),
                [name],
                read_employee_row,
            )
            .optional()?;
        row.map(|row| self.instance_from_db(row)).transpose()
    }

    /// Writes every mutable column of a persisted employee.
    ///
    /// # Errors
    /// - `RepoError::NotPersisted` when the employee has no id.
    pub fn update(&self, employee: &EmployeeHandle) -> RepoResult<EmployeeHandle> {
        let current = employee.borrow();
        let Some(id) = current.id() else {
            return Err(RepoError::NotPersisted { entity: "employee" });
        };

        let changed = self.conn.execute(
            "UPDATE employees
             SET name = ?1, title = ?2, department_id = ?3
             WHERE id = ?4;",
            params![current.name(), current.title(), current.department_id(), id],
        )?;
        if changed == 0 {
            warn!("event=employee_update module=repo status=missing id={id}");
        } else {
            info!("event=employee_update module=repo status=ok id={id}");
        }

        Ok(Rc::clone(employee))
    }

    /// Deletes the row, untracks the handle and makes it transient again.
    /// Deleting a transient employee does nothing.
    pub fn delete(&self, employee: &EmployeeHandle) -> RepoResult<()> {
        let Some(id) = employee.borrow().id() else {
            return Ok(());
        };

        self.conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        self.identity.remove(id);
        employee.borrow_mut().set_id(None);
        info!("event=employee_delete module=repo status=ok id={id}");
        Ok(())
    }

    pub fn get_all(&self) -> RepoResult<Vec<EmployeeHandle>> {
        let mut stmt = self.conn.prepare(&format!("{EMPLOYEE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(self.instance_from_db(read_employee_row(row)?)?);
        }
        Ok(employees)
    }

    /// Identity map backing this repository.
    pub fn identity_map(&self) -> &IdentityMap<Employee> {
        &self.identity
    }
}

impl EmployeeLookup for EmployeeRepository<'_> {
    fn employee_exists(&self, id: EmployeeId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn read_employee_row(row: &Row<'_>) -> rusqlite::Result<EmployeeRow> {
    Ok(EmployeeRow {
        id: row.get("id")?,
        name: row.get("name")?,
        title: row.get("title")?,
        department_id: row.get("department_id")?,
    })
}
