use rusqlite::Connection;
use staffdb_core::db::schema::{self, EMPLOYEES};
use staffdb_core::db::{open_db, open_db_in_memory, open_db_with, DbError};
use staffdb_core::{DbLocation, StaffService, StoreConfig};
use std::path::PathBuf;

#[test]
fn open_does_not_create_application_tables() {
    let conn = open_db_in_memory().unwrap();

    assert!(!schema::table_exists(&conn, EMPLOYEES.name).unwrap());
    assert_eq!(foreign_keys(&conn), 0);
}

#[test]
fn foreign_keys_follow_config() {
    let config = StoreConfig {
        enforce_foreign_keys: true,
        ..StoreConfig::default()
    };
    let conn = open_db_with(&config).unwrap();

    assert_eq!(foreign_keys(&conn), 1);
}

#[test]
fn file_database_keeps_rows_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staff.db");

    {
        let conn = open_db(&path).unwrap();
        let service = StaffService::new(&conn);
        service.create_schema().unwrap();
        service.add_department("Analytics", "London").unwrap();
        service.hire("Ada Lovelace", "Engineer", 1).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let service = StaffService::new(&conn);
    service.create_schema().unwrap();
    let ada = service
        .employees()
        .find_by_name("Ada Lovelace")
        .unwrap()
        .unwrap();
    assert_eq!(ada.borrow().title(), "Engineer");
}

#[test]
fn empty_file_path_is_rejected() {
    let config = StoreConfig {
        location: DbLocation::File(PathBuf::new()),
        ..StoreConfig::default()
    };

    let err = open_db_with(&config).unwrap_err();
    assert!(matches!(err, DbError::InvalidConfig(_)));
}

fn foreign_keys(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap()
}
