//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `staffdb_core` linkage against a real database file.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `staffdb_cli [DB_PATH]`. Without a path an in-memory database is
//! used. Set `STAFFDB_LOG_DIR` to an absolute directory to enable file logs.

use staffdb_core::db::{open_db_with, schema};
use staffdb_core::{StaffService, StoreConfig};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "STAFFDB_LOG_DIR";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("staffdb_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        staffdb_core::init_logging(staffdb_core::default_log_level(), &log_dir)?;
    }

    let config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::file(path),
        None => StoreConfig::default(),
    };

    let conn = open_db_with(&config)?;
    let service = StaffService::new(&conn);
    service.create_schema()?;

    println!("staffdb_core version={}", staffdb_core::core_version());
    for table in schema::ALL_TABLES {
        println!(
            "table={} present={}",
            table.name,
            schema::table_exists(&conn, table.name)?
        );
    }
    println!("employees={}", service.employees().get_all()?.len());
    println!("reviews={}", service.reviews().get_all()?.len());
    Ok(())
}
