//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections from a `StoreConfig`.
//! - Apply connection pragmas requested by configuration.
//!
//! # Invariants
//! - `foreign_keys` is set explicitly on every returned connection.
//! - A failed bootstrap never returns a half-configured connection.

use super::{DbError, DbResult};
use crate::config::{DbLocation, StoreConfig};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file with default store settings.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with(&StoreConfig::file(path.as_ref()))
}

/// Opens an in-memory SQLite database with default store settings.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_with(&StoreConfig::default())
}

/// Opens a SQLite connection described by `config`.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
///
/// # Errors
/// - `DbError::InvalidConfig` when the file path is empty.
/// - `DbError::Sqlite` when SQLite refuses to open or configure the handle.
pub fn open_db_with(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = config.location.mode_label();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = match &config.location {
        DbLocation::Memory => Connection::open_in_memory().map_err(DbError::from),
        DbLocation::File(path) if path.as_os_str().is_empty() => Err(DbError::InvalidConfig(
            "database file path cannot be empty".to_string(),
        )),
        DbLocation::File(path) => Connection::open(path).map_err(DbError::from),
    };

    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    match bootstrap_connection(&conn, config) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} foreign_keys={} duration_ms={}",
                config.enforce_foreign_keys,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection, config: &StoreConfig) -> DbResult<()> {
    let pragma = if config.enforce_foreign_keys {
        "PRAGMA foreign_keys = ON;"
    } else {
        "PRAGMA foreign_keys = OFF;"
    };
    conn.execute_batch(pragma)?;
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
    Ok(())
}
