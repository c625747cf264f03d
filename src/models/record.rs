use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One incident ticket in the logbook.
/// Field names mirror the JSON kept in the `records` slot, so a record
/// serializes to the same shape the handover payload carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque id assigned at creation, immutable afterwards.
    /// Legacy entries may lack it; `load` synthesizes one in memory.
    #[serde(default)]
    pub id: String,
    pub ticket_number: String,
    pub operator_name: String,
    pub shift: String,
    pub region: String,
    pub date: String,
    pub source: String,
    pub case_details: String,
    pub action_taken: String,
    pub remark: String,
    /// Last-modified instant, ISO 8601 with milliseconds, UTC.
    pub timestamp: String,
}

impl Record {
    /// Build a fresh record from a submitted draft.
    pub fn new(draft: Draft, now: DateTime<Utc>) -> Self {
        let d = draft.trimmed();
        Self {
            id: generate_id(now),
            ticket_number: d.ticket_number,
            operator_name: d.operator_name,
            shift: d.shift,
            region: d.region,
            date: d.date,
            source: d.source,
            case_details: d.case_details,
            action_taken: d.action_taken,
            remark: d.remark,
            timestamp: iso_timestamp(now),
        }
    }

    /// Replace the mutable fields with the draft's values.
    /// The id survives; the timestamp moves to `now`.
    pub fn apply(&mut self, draft: Draft, now: DateTime<Utc>) {
        let d = draft.trimmed();
        self.ticket_number = d.ticket_number;
        self.operator_name = d.operator_name;
        self.shift = d.shift;
        self.region = d.region;
        self.date = d.date;
        self.source = d.source;
        self.case_details = d.case_details;
        self.action_taken = d.action_taken;
        self.remark = d.remark;
        self.timestamp = iso_timestamp(now);
    }

    /// Short prefix shown in tables; long enough to stay unique in
    /// practice, short enough to type.
    pub fn short_id(&self) -> &str {
        let end = self.id.len().min(7);
        &self.id[..end]
    }
}

/// Form payload for creating or editing a record.
///
/// `trimmed` mirrors the submit behavior: free-text fields are
/// whitespace-trimmed, the shift comes from a fixed choice list and is
/// kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub ticket_number: String,
    pub operator_name: String,
    pub shift: String,
    pub region: String,
    pub date: String,
    pub source: String,
    pub case_details: String,
    pub action_taken: String,
    pub remark: String,
}

impl Draft {
    pub fn trimmed(mut self) -> Self {
        for f in [
            &mut self.ticket_number,
            &mut self.operator_name,
            &mut self.region,
            &mut self.date,
            &mut self.source,
            &mut self.case_details,
            &mut self.action_taken,
            &mut self.remark,
        ] {
            *f = f.trim().to_string();
        }
        self
    }
}

impl From<&Record> for Draft {
    fn from(r: &Record) -> Self {
        Self {
            ticket_number: r.ticket_number.clone(),
            operator_name: r.operator_name.clone(),
            shift: r.shift.clone(),
            region: r.region.clone(),
            date: r.date.clone(),
            source: r.source.clone(),
            case_details: r.case_details.clone(),
            action_taken: r.action_taken.clone(),
            remark: r.remark.clone(),
        }
    }
}

/// Tombstone kept in the `deleted_records` slot.
/// Deletion only ever moves records here; nothing is destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Deletion instant, same ISO 8601 format as the record timestamp.
    pub deleted_at: String,
}

/// ISO 8601 with milliseconds and a `Z` suffix,
/// e.g. `2026-08-23T07:41:05.312Z`.
pub fn iso_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Epoch millis in base 36 followed by nine random base-36 characters,
/// e.g. `mfr1x2ab4kq7r3p9z`. Collisions would need two ids in the same
/// millisecond with the same random tail.
pub fn generate_id(now: DateTime<Utc>) -> String {
    let mut id = to_base36(now.timestamp_millis().max(0) as u64);
    let mut rng = rand::rng();
    for _ in 0..9 {
        id.push(BASE36[rng.random_range(0..BASE36.len())] as char);
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}
