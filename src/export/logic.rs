// src/export/logic.rs

use crate::core::store::StoreLogic;
use crate::core::view;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::models::{Record, SortSpec};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use std::io;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the record list.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `filter`: optional substring filter, matched the same way as
    ///   the `list` command
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        filter: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(&path, force)?;

        let records = load_filtered(pool, filter)?;

        if records.is_empty() {
            warning("No records found for selected filter.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records, &path)?,
        }

        Ok(())
    }
}

/// Loads records from the store and runs them through the same
/// filter/sort pipeline as `list`, so exports match what the user sees
/// on screen.
fn load_filtered(pool: &DbPool, filter: &Option<String>) -> AppResult<Vec<Record>> {
    let records = StoreLogic::load_records(pool)?;
    let needle = filter.as_deref().unwrap_or("");
    Ok(view::apply(&records, needle, &SortSpec::default()))
}
