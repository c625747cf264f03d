//! Record store: hydration and persistence of the live records, the
//! tombstone list, and the login flag, all through the string slots in
//! the database.

use crate::db::pool::DbPool;
use crate::db::slots;
use crate::errors::{AppError, AppResult};
use crate::models::record::generate_id;
use crate::models::{DeletedRecord, Draft, Record};
use chrono::Utc;

/// Slot holding the live records as a JSON array.
pub const RECORDS_SLOT: &str = "records";
/// Slot holding tombstoned records as a JSON array.
pub const DELETED_SLOT: &str = "deleted_records";
/// Slot holding the login flag.
pub const LOGIN_SLOT: &str = "logged_in";

pub struct StoreLogic;

impl StoreLogic {
    /// Hydrate the live records. An absent slot is an empty logbook.
    /// A slot that exists but does not parse fails loud; the stored
    /// bytes stay untouched for inspection.
    pub fn load_records(pool: &DbPool) -> AppResult<Vec<Record>> {
        let Some(raw) = slots::get(pool, RECORDS_SLOT)? else {
            return Ok(Vec::new());
        };
        let mut records: Vec<Record> = serde_json::from_str(&raw)
            .map_err(|e| AppError::CorruptSlot(RECORDS_SLOT.to_string(), e.to_string()))?;
        // Legacy entries written before ids existed get one now; the
        // slot itself is only rewritten on the next persist.
        for r in &mut records {
            if r.id.is_empty() {
                r.id = generate_id(Utc::now());
            }
        }
        Ok(records)
    }

    pub fn save_records(pool: &DbPool, records: &[Record]) -> AppResult<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| AppError::Other(format!("serialize records: {e}")))?;
        slots::set(pool, RECORDS_SLOT, &json)
    }

    pub fn load_tombstones(pool: &DbPool) -> AppResult<Vec<DeletedRecord>> {
        let Some(raw) = slots::get(pool, DELETED_SLOT)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw)
            .map_err(|e| AppError::CorruptSlot(DELETED_SLOT.to_string(), e.to_string()))
    }

    /// Append tombstones to the deleted slot.
    /// Callers write this slot before the live one, so an interrupted
    /// delete can only duplicate a record, never lose it.
    pub fn append_tombstones(pool: &DbPool, new: Vec<DeletedRecord>) -> AppResult<()> {
        if new.is_empty() {
            return Ok(());
        }
        let mut all = Self::load_tombstones(pool)?;
        all.extend(new);
        let json = serde_json::to_string(&all)
            .map_err(|e| AppError::Other(format!("serialize tombstones: {e}")))?;
        slots::set(pool, DELETED_SLOT, &json)
    }

    pub fn is_logged_in(pool: &DbPool) -> AppResult<bool> {
        Ok(matches!(
            slots::get(pool, LOGIN_SLOT)?.as_deref(),
            Some("true")
        ))
    }

    pub fn set_logged_in(pool: &DbPool, flag: bool) -> AppResult<()> {
        if flag {
            slots::set(pool, LOGIN_SLOT, "true")
        } else {
            slots::delete(pool, LOGIN_SLOT)
        }
    }

    /// First-run seeding: one sample ticket so a fresh logbook has
    /// something to show. Runs only while the records slot has never
    /// been written, even as an empty list.
    pub fn seed_if_absent(pool: &DbPool) -> AppResult<bool> {
        if slots::get(pool, RECORDS_SLOT)?.is_some() {
            return Ok(false);
        }
        let now = Utc::now();
        let sample = Record::new(
            Draft {
                ticket_number: "TCK-1001".to_string(),
                operator_name: "Alice Morgan".to_string(),
                shift: "Morning".to_string(),
                region: "EMEA".to_string(),
                date: now.format("%Y-%m-%d").to_string(),
                source: "Phone".to_string(),
                case_details: "VPN session drops every few minutes".to_string(),
                action_taken: "Reset the tunnel and pushed a fresh client profile".to_string(),
                remark: "Monitoring until the next shift".to_string(),
            },
            now,
        );
        Self::save_records(pool, &[sample])?;
        Ok(true)
    }

    /// Resolve a user-supplied id or unique prefix against the live
    /// records.
    pub fn resolve_id(records: &[Record], needle: &str) -> AppResult<String> {
        if let Some(r) = records.iter().find(|r| r.id == needle) {
            return Ok(r.id.clone());
        }
        let mut hits = records.iter().filter(|r| r.id.starts_with(needle));
        match (hits.next(), hits.next()) {
            (Some(r), None) => Ok(r.id.clone()),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(needle.to_string())),
            (None, _) => Err(AppError::RecordNotFound(needle.to_string())),
        }
    }
}
