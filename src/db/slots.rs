//! String-keyed slot store.
//! The persistence contract is get/set of whole text documents, one
//! row per slot; callers own the serialization.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::{OptionalExtension, params};

pub fn get(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

/// Upsert one slot. A full disk surfaces as [`AppError::StorageFull`]
/// so callers can decide whether that is fatal.
pub fn set(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value]).map_err(map_full)?;
    Ok(())
}

pub fn delete(pool: &DbPool, key: &str) -> AppResult<()> {
    pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
    Ok(())
}

fn map_full(e: rusqlite::Error) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::DiskFull => {
            AppError::StorageFull
        }
        _ => AppError::Db(e),
    }
}
