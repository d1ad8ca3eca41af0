//! SQLite pool backing the `response` and `poi` tables
//!
//! Every pooled connection is opened with the same PRAGMAs. The schema is
//! brought up to date once, when the pool is created.

use std::path::{Path, PathBuf};

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;
use tracing::{debug, info};

use super::migrations::run_migrations;
use crate::config::DatabaseConfig;

/// Path value selecting a private in-memory database
const IN_MEMORY: &str = ":memory:";

/// Applied to each new connection; `busy_timeout` is per connection
const CONNECTION_PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA busy_timeout = 5000;
";

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cannot create database directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pool of connections to the POI database
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Open the POI database described by `config`
///
/// Missing parent directories of a file database are created. With
/// `run_migrations` set, the `response` and `poi` tables are created or
/// upgraded before the pool is returned.
///
/// # Errors
///
/// Returns [`DatabaseError`] if the directory cannot be created, no
/// connection can be opened, or the schema cannot be applied.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Opening POI database");

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager_for(&config.path)?)?;

    if config.run_migrations {
        run_migrations(&*pool.get()?)?;
    }

    debug!(path = %config.path, "POI database ready");
    Ok(pool)
}

fn manager_for(path: &str) -> Result<SqliteConnectionManager, DatabaseError> {
    let manager = if path == IN_MEMORY {
        SqliteConnectionManager::memory()
    } else {
        ensure_parent_dir(Path::new(path))?;
        SqliteConnectionManager::file(path)
    };
    Ok(manager.with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS)))
}

fn ensure_parent_dir(path: &Path) -> Result<(), DatabaseError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| DatabaseError::Directory {
                path: parent.to_path_buf(),
                source,
            }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(path: &Path) -> DatabaseConfig {
        DatabaseConfig {
            path: path.to_string_lossy().into_owned(),
            ..DatabaseConfig::default()
        }
    }

    fn table_names(pool: &ConnectionPool) -> Vec<String> {
        let conn = pool.get().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        names
    }

    #[test]
    fn in_memory_pool_has_poi_tables() {
        let pool = create_pool(&DatabaseConfig::in_memory()).unwrap();
        let tables = table_names(&pool);
        assert!(tables.contains(&"response".to_string()));
        assert!(tables.contains(&"poi".to_string()));
    }

    #[test]
    fn migrations_can_be_skipped() {
        let config = DatabaseConfig {
            run_migrations: false,
            ..DatabaseConfig::in_memory()
        };
        let pool = create_pool(&config).unwrap();
        assert!(!table_names(&pool).contains(&"poi".to_string()));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("poi.db");

        create_pool(&file_config(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn every_connection_gets_busy_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&file_config(&dir.path().join("poi.db"))).unwrap();

        let first = pool.get().unwrap();
        let second = pool.get().unwrap();
        for conn in [&first, &second] {
            let timeout: i64 = conn
                .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
                .unwrap();
            assert_eq!(timeout, 5000);
        }
    }

    #[test]
    fn unwritable_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"").unwrap();

        let err = create_pool(&file_config(&blocker.join("poi.db"))).unwrap_err();
        assert!(matches!(err, DatabaseError::Directory { ref path, .. } if *path == blocker));
    }

    #[test]
    fn database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "data/japan-poi.db");
        assert_eq!(config.max_connections, 2);
        assert!(config.run_migrations);
    }
}
