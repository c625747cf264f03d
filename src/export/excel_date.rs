// src/export/excel_date.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Excel serial for a plain `YYYY-MM-DD` record date.
pub(crate) fn date_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(excel_serial(&d.and_hms_opt(0, 0, 0)?))
}

/// Excel serial for an RFC 3339 instant, normalized to UTC.
pub(crate) fn instant_serial(s: &str) -> Option<f64> {
    let dt = DateTime::parse_from_rfc3339(s).ok()?;
    Some(excel_serial(&dt.naive_utc()))
}

/// Days since the Excel epoch (1899-12-30), time of day as the
/// fractional part.
fn excel_serial(dt: &NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let delta = *dt - epoch;
    let days = delta.num_days() as f64;
    let secs = (delta.num_seconds() - delta.num_days() * 86400) as f64;

    days + secs / 86400.0
}
