//! Database migrations
//!
//! Manages the schema of the `response` and `poi` relations. Both tables are
//! append-only with surrogate integer keys and no foreign key between them.

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            from_version = current_version,
            to_version = SCHEMA_VERSION,
            "Running database migrations"
        );

        if current_version < 1 {
            if let Err(e) = migrate_v1(conn) {
                error!(version = 1, error = %e, "Migration V001 (response and poi tables) failed");
                return Err(e);
            }
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!(version = SCHEMA_VERSION, "Database migrations complete");
    } else {
        debug!(version = current_version, "Database schema is up to date");
    }

    Ok(())
}

/// Drop both relations and recreate them empty
pub fn reset_schema(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Dropping response and poi tables");
    conn.execute_batch(
        "
        DROP TABLE IF EXISTS response;
        DROP TABLE IF EXISTS poi;
        DROP TABLE IF EXISTS schema_version;
        ",
    )?;
    run_migrations(conn)
}

/// Get current schema version
fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration to version 1: response and poi tables
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: response and poi tables");

    conn.execute_batch(
        "
        -- One row per fetch
        CREATE TABLE IF NOT EXISTS response (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            url TEXT,
            start INTEGER,
            status TEXT,
            content TEXT,
            processed_at TEXT,
            json_endpoint TEXT,
            pagination TEXT,
            timestamp TEXT
        );

        -- One row per local result
        CREATE TABLE IF NOT EXISTS poi (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            services TEXT,
            coordinates TEXT,
            title TEXT,
            address TEXT,
            search_type TEXT,
            return_type TEXT,
            rating REAL,
            reviews_original TEXT,
            reviews INTEGER,
            price TEXT,
            description TEXT,
            place_id TEXT,
            place_id_search TEXT,
            lsig TEXT,
            timestamp TEXT
        );
        ",
    )?;

    Ok(())
}
