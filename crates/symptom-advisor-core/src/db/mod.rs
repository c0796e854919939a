//! SQLite store for submissions and their feedback.
//!
//! One connection, schema applied on open. Table-specific queries live in
//! `submissions` and `feedback` as further `impl Database` blocks.

mod feedback;
mod schema;
mod submissions;

pub use schema::{SCHEMA, SCHEMA_VERSION};

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;
use thiserror::Error;

/// How long a write waits on a locked database file.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Store errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Stored JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Submission store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `path`, creating the file and schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        tracing::debug!(path = %path.as_ref().display(), "Opening SQLite store");
        Self::with_connection(conn)
    }

    /// Throwaway in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> DbResult<Self> {
        conn.execute_batch(SCHEMA)?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(Self { conn })
    }

    /// Schema version recorded in the file.
    pub fn schema_version(&self) -> DbResult<i32> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?)
    }

    /// Raw connection, for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
