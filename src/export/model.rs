// src/export/model.rs

use crate::models::Record;

/// Positions of the two columns the XLSX writer promotes to typed
/// Excel values. Must track the header order below.
pub(crate) const DATE_COL: usize = 5;
pub(crate) const TIMESTAMP_COL: usize = 10;

/// Column order shared by the CSV and XLSX writers. Matches the field
/// names used in the stored JSON so an exported file lines up with the
/// records slot.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "ticketNumber",
        "operatorName",
        "shift",
        "region",
        "date",
        "source",
        "caseDetails",
        "actionTaken",
        "remark",
        "timestamp",
    ]
}

pub(crate) fn record_to_row(record: &Record) -> Vec<String> {
    vec![
        record.id.clone(),
        record.ticket_number.clone(),
        record.operator_name.clone(),
        record.shift.clone(),
        record.region.clone(),
        record.date.clone(),
        record.source.clone(),
        record.case_details.clone(),
        record.action_taken.clone(),
        record.remark.clone(),
        record.timestamp.clone(),
    ]
}
