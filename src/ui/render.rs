//! Presentation is a pure function of state: everything here builds
//! strings from [`AppState`] or record values, the command layer
//! decides when to print them.

use crate::config::Config;
use crate::core::state::AppState;
use crate::models::{DeletedRecord, Record};
use crate::share::Snapshot;
use crate::utils::colors;
use crate::utils::date::human_timestamp;
use crate::utils::formatting::{count_noun, truncate_ellipsis};
use crate::utils::table::Table;

const LIST_HEADERS: [&str; 8] = [
    "Id", "Ticket #", "Operator", "Shift", "Region", "Date", "Source", "Updated",
];

const SNAPSHOT_HEADERS: [&str; 7] = [
    "Ticket #", "Operator", "Shift", "Region", "Date", "Source", "Updated",
];

const TRASH_HEADERS: [&str; 5] = ["Id", "Ticket #", "Operator", "Date", "Deleted"];

/// Widest a free-text cell gets before it is shortened.
const CELL_MAX: usize = 24;

fn cell(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        truncate_ellipsis(value, CELL_MAX)
    }
}

fn record_row(r: &Record) -> Vec<String> {
    vec![
        r.short_id().to_string(),
        cell(&r.ticket_number),
        cell(&r.operator_name),
        cell(&r.shift),
        cell(&r.region),
        cell(&r.date),
        cell(&r.source),
        human_timestamp(&r.timestamp),
    ]
}

/// Table of one page of the view.
pub fn page_table(records: &[Record], cfg: &Config) -> String {
    let rows = records.iter().map(record_row).collect();
    Table::fitted(&LIST_HEADERS, rows).render(&cfg.separator_char)
}

/// Read-only table of a decoded handover snapshot (no ids travel).
pub fn snapshot_table(snapshots: &[Snapshot], cfg: &Config) -> String {
    let rows = snapshots
        .iter()
        .map(|s| {
            vec![
                cell(&s.ticket_number),
                cell(&s.operator_name),
                cell(&s.shift),
                cell(&s.region),
                cell(&s.date),
                cell(&s.source),
                human_timestamp(&s.timestamp),
            ]
        })
        .collect();
    Table::fitted(&SNAPSHOT_HEADERS, rows).render(&cfg.separator_char)
}

/// Tombstone listing for `trash`.
pub fn trash_table(tombstones: &[DeletedRecord], cfg: &Config) -> String {
    let rows = tombstones
        .iter()
        .map(|t| {
            vec![
                t.record.short_id().to_string(),
                cell(&t.record.ticket_number),
                cell(&t.record.operator_name),
                cell(&t.record.date),
                human_timestamp(&t.deleted_at),
            ]
        })
        .collect();
    Table::fitted(&TRASH_HEADERS, rows).render(&cfg.separator_char)
}

/// "Showing X-Y of N records" counts line. Mentions the unfiltered
/// total when a filter hides part of the logbook.
pub fn counts_line(state: &AppState, per_page: usize) -> String {
    let total = state.filtered.len();
    if total == 0 {
        return if state.records.is_empty() {
            "No records yet.".to_string()
        } else {
            format!(
                "No records match {}",
                colors::dim(&format!("(0 of {} shown)", state.records.len()))
            )
        };
    }

    let shown = state.page(per_page);
    if shown.is_empty() {
        return format!(
            "Page {} of {} is empty.",
            state.view.page,
            state.page_count(per_page)
        );
    }

    let start = (state.view.page - 1) * per_page + 1;
    let end = start + shown.len() - 1;
    let mut line = format!(
        "Showing {}-{} of {}",
        start,
        end,
        count_noun(total, "record")
    );
    if total != state.records.len() {
        line.push_str(&format!(
            " {}",
            colors::dim(&format!("(filtered from {})", state.records.len()))
        ));
    }
    line
}

/// "Page X of Y, sorted by K" status line under the table.
pub fn status_line(state: &AppState, per_page: usize) -> String {
    let mut line = format!(
        "Page {} of {} | sorted by {} {}",
        state.view.page,
        state.page_count(per_page).max(1),
        state.view.sort.key.label(),
        state.view.sort.direction.arrow()
    );
    let term = state.view.filter.trim();
    if !term.is_empty() {
        line.push_str(&format!(" | filter: '{term}'"));
    }
    line
}

/// Full detail of one record, long fields wrapped.
pub fn detail(r: &Record) -> String {
    let rows: [(&str, &str); 11] = [
        ("Id", r.id.as_str()),
        ("Ticket #", r.ticket_number.as_str()),
        ("Operator", r.operator_name.as_str()),
        ("Shift", r.shift.as_str()),
        ("Region", r.region.as_str()),
        ("Date", r.date.as_str()),
        ("Source", r.source.as_str()),
        ("Case Details", r.case_details.as_str()),
        ("Action Taken", r.action_taken.as_str()),
        ("Remark", r.remark.as_str()),
        ("Updated", r.timestamp.as_str()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let shown = if value.trim().is_empty() { "-" } else { value };
        let wrapped = textwrap::fill(shown, 64);
        let mut lines = wrapped.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!(
                "{:<14} {}\n",
                format!("{label}:"),
                colors::colorize_empty(first)
            ));
        }
        for cont in lines {
            out.push_str(&format!("{:<14} {}\n", "", cont));
        }
    }
    out
}
