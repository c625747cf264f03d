//! Filter → sort → paginate pipeline.
//! Pure functions over the live records; the result is a derived
//! snapshot, display order is never written back to the store.

use crate::models::{Direction, Field, Record, SortSpec};
use chrono::{DateTime, FixedOffset};

/// Run the full pipeline and return the visible records in order.
pub fn apply(records: &[Record], filter: &str, sort: &SortSpec) -> Vec<Record> {
    let needle = filter.trim().to_lowercase();
    let mut view: Vec<Record> = records
        .iter()
        .filter(|r| needle.is_empty() || matches(r, &needle))
        .cloned()
        .collect();
    sort_records(&mut view, sort);
    view
}

/// Case-insensitive substring match across every value of the record,
/// id and timestamp included. `needle` must already be lowercased.
pub fn matches(r: &Record, needle: &str) -> bool {
    [
        r.id.as_str(),
        r.ticket_number.as_str(),
        r.operator_name.as_str(),
        r.shift.as_str(),
        r.region.as_str(),
        r.date.as_str(),
        r.source.as_str(),
        r.case_details.as_str(),
        r.action_taken.as_str(),
        r.remark.as_str(),
        r.timestamp.as_str(),
    ]
    .iter()
    .any(|v| v.to_lowercase().contains(needle))
}

/// Stable sort of the filtered view. Ties keep their incoming order in
/// either direction, so equal keys never reshuffle between renders.
pub fn sort_records(view: &mut [Record], sort: &SortSpec) {
    view.sort_by(|a, b| {
        let ord = match sort.key {
            Field::Timestamp => parse_instant(&a.timestamp).cmp(&parse_instant(&b.timestamp)),
            key => key
                .value(a)
                .to_lowercase()
                .cmp(&key.value(b).to_lowercase()),
        };
        match sort.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

/// Unparseable timestamps sort before every real instant.
fn parse_instant(ts: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(ts).ok()
}

/// Slice of the view for a 1-based page number.
/// An out-of-range page is empty, never an error.
pub fn page_slice<'a>(view: &'a [Record], page: usize, per_page: usize) -> &'a [Record] {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= view.len() {
        return &[];
    }
    let end = (start + per_page).min(view.len());
    &view[start..end]
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}
