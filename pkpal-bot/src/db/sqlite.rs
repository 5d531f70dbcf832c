//! Pooled SQLite connections.
//!
//! Each note operation checks a connection out of the pool for the length of
//! one transaction, so concurrent commands never share a connection.

use std::path::Path;
use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const POOL_SIZE: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self, String> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create database directory: {}", e))?;
            }
        }

        let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.execute_batch("PRAGMA journal_mode=WAL;")
        });

        let pool = r2d2::Pool::builder()
            .max_size(POOL_SIZE)
            .build(manager)
            .map_err(|e| format!("Failed to open database {}: {}", database_url, e))?;

        Ok(Self { pool })
    }

    pub fn conn(&self) -> Result<DbConn, r2d2::Error> {
        self.pool.get()
    }
}
