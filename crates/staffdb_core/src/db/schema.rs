//! Table definitions and idempotent create/drop helpers.
//!
//! # Invariants
//! - Create uses `CREATE TABLE IF NOT EXISTS`, drop uses `DROP TABLE IF EXISTS`,
//!   so both can be repeated safely.
//! - `ALL_TABLES` lists referenced tables before the tables pointing at them.

use super::DbResult;
use log::info;
use rusqlite::Connection;

/// One application table and its DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    create_sql: &'static str,
}

pub const DEPARTMENTS: Table = Table {
    name: "departments",
    create_sql: "CREATE TABLE IF NOT EXISTS departments (
        id INTEGER PRIMARY KEY,
        name TEXT,
        location TEXT
    );",
};

pub const EMPLOYEES: Table = Table {
    name: "employees",
    create_sql: "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY,
        name TEXT,
        title TEXT,
        department_id INTEGER,
        FOREIGN KEY(department_id) REFERENCES departments(id)
    );",
};

pub const REVIEWS: Table = Table {
    name: "reviews",
    create_sql: "CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY,
        year INTEGER,
        summary TEXT,
        employee_id INTEGER,
        FOREIGN KEY(employee_id) REFERENCES employees(id)
    );",
};

/// Tables in dependency order (referenced tables first).
pub const ALL_TABLES: [Table; 3] = [DEPARTMENTS, EMPLOYEES, REVIEWS];

/// Creates `table` if it does not exist yet.
pub fn create_table(conn: &Connection, table: Table) -> DbResult<()> {
    conn.execute_batch(table.create_sql)?;
    info!(
        "event=schema_create module=db status=ok table={}",
        table.name
    );
    Ok(())
}

/// Drops `table` if it exists.
pub fn drop_table(conn: &Connection, table: Table) -> DbResult<()> {
    conn.execute_batch(&format!("DROP TABLE IF EXISTS {};", table.name))?;
    info!("event=schema_drop module=db status=ok table={}", table.name);
    Ok(())
}

/// Returns whether a table named `name` exists on this connection.
pub fn table_exists(conn: &Connection, name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{create_table, drop_table, table_exists, REVIEWS};
    use rusqlite::Connection;

    #[test]
    fn create_and_drop_are_repeatable() {
        let conn = Connection::open_in_memory().unwrap();

        create_table(&conn, REVIEWS).unwrap();
        create_table(&conn, REVIEWS).unwrap();
        assert!(table_exists(&conn, "reviews").unwrap());

        drop_table(&conn, REVIEWS).unwrap();
        drop_table(&conn, REVIEWS).unwrap();
        assert!(!table_exists(&conn, "reviews").unwrap());
    }
}
