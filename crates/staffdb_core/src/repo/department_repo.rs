//! SQLite access for the `departments` table.
//!
//! Departments are returned as plain values; only their existence matters to
//! the rest of the crate.

use crate::db::schema::{self, DEPARTMENTS};
use crate::model::department::{Department, DepartmentId};
use crate::repo::lookup::DepartmentLookup;
use crate::repo::{invalid_row, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name, location FROM departments";

pub struct DepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> DepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn create_table(&self) -> RepoResult<()> {
        schema::create_table(self.conn, DEPARTMENTS)?;
        Ok(())
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        schema::drop_table(self.conn, DEPARTMENTS)?;
        Ok(())
    }

    /// Validates and inserts a department, returning it with its new id.
    pub fn create(&self, name: &str, location: &str) -> RepoResult<Department> {
        let department = Department::new(name, location)?;
        self.conn.execute(
            "INSERT INTO departments (name, location) VALUES (?1, ?2);",
            params![department.name(), department.location()],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=department_insert module=repo status=ok id={id}");
        Ok(department.with_id(id))
    }

    pub fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let row = self
            .conn
            .query_row(
                &format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_department_row,
            )
            .optional()?;

        row.map(|(id, name, location)| {
            Department::new(&name, &location)
                .map(|department| department.with_id(id))
                .map_err(|err| invalid_row(DEPARTMENTS.name, id, err))
        })
        .transpose()
    }

    /// Deletes the department row and clears its id. No-op when transient.
    pub fn delete(&self, department: &mut Department) -> RepoResult<()> {
        let Some(id) = department.id() else {
            return Ok(());
        };
        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;
        department.clear_id();
        info!("event=department_delete module=repo status=ok id={id}");
        Ok(())
    }
}

impl DepartmentLookup for DepartmentRepository<'_> {
    fn department_exists(&self, id: DepartmentId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM departments WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn read_department_row(row: &Row<'_>) -> rusqlite::Result<(DepartmentId, String, String)> {
    Ok((row.get("id")?, row.get("name")?, row.get("location")?))
}
