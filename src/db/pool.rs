//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::ensure_schema;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database for a command, making sure the base schema
    /// exists. Quiet when there is nothing to create; full migrations
    /// stay with `init`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        ensure_schema(&pool.conn)?;
        Ok(pool)
    }
}
