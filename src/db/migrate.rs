use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Create the base schema when missing: the `kv` slot table holding
/// the record store, and the internal `log` table.
/// Idempotent and silent, safe to run on every command.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a versioned migration was already applied, using the
/// marker rows in the `log` table.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Early releases kept the browser-era slot names. Rename them once;
/// if a modern slot already exists the stale legacy row is dropped
/// instead of overwriting it.
fn migrate_rename_legacy_slots(conn: &Connection) -> Result<()> {
    let version = "20260114_0001_rename_legacy_slots";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let legacy: i64 = conn.query_row(
        "SELECT COUNT(*) FROM kv
         WHERE key IN ('inventoryRecords', 'deletedInventoryRecords', 'isLoggedIn')",
        [],
        |r| r.get(0),
    )?;

    if legacy > 0 {
        conn.execute_batch(
            r#"
            BEGIN;

            UPDATE OR IGNORE kv SET key = 'records'         WHERE key = 'inventoryRecords';
            DELETE FROM kv WHERE key = 'inventoryRecords';

            UPDATE OR IGNORE kv SET key = 'deleted_records' WHERE key = 'deletedInventoryRecords';
            DELETE FROM kv WHERE key = 'deletedInventoryRecords';

            UPDATE OR IGNORE kv SET key = 'logged_in'       WHERE key = 'isLoggedIn';
            DELETE FROM kv WHERE key = 'isLoggedIn';

            COMMIT;
            "#,
        )?;
        success(format!("Migrated {legacy} legacy slot name(s)."));
    }

    mark_migration(conn, version, "Renamed legacy browser-era slot keys")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_schema(conn)?;
    migrate_rename_legacy_slots(conn)?;
    Ok(())
}
