//! Snapshot codec for handover links.
//!
//! The visible records travel as JSON inside a URL fragment, so the
//! encoding uses the URL-safe base64 alphabet with the padding
//! stripped: the payload survives fragments, query strings, and chat
//! transports without escaping.

use crate::models::Record;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// A record as it travels inside a handover link. The id stays home:
/// ids are local storage handles, meaningless to the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub ticket_number: String,
    pub operator_name: String,
    pub shift: String,
    pub region: String,
    pub date: String,
    pub source: String,
    pub case_details: String,
    pub action_taken: String,
    pub remark: String,
    pub timestamp: String,
}

impl From<&Record> for Snapshot {
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
            timestamp: r.timestamp.clone(),
        }
    }
}

/// Encode a list of snapshots for transport. Total for any input:
/// string-only structs have no failing serialize path.
pub fn encode(snapshots: &[Snapshot]) -> String {
    let json = serde_json::to_string(snapshots).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Exact inverse of [`encode`]. Malformed input of any kind, wrong
/// alphabet, damaged bytes, or JSON that is not a snapshot list, is
/// `None`. Never panics.
pub fn decode(payload: &str) -> Option<Vec<Snapshot>> {
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim()).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&json).ok()
}
