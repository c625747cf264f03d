// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_serial, instant_serial};
use crate::export::model::{DATE_COL, TIMESTAMP_COL, get_headers, record_to_row};
use crate::export::notify_export_success;
use crate::models::Record;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: Color = Color::RGB(0x2F75B5);
const BAND_BG: [Color; 2] = [Color::RGB(0xEAF3FB), Color::RGB(0xFFFFFF)];

/// Cell formats, one per stripe color.
struct CellStyles {
    text: [Format; 2],
    date: [Format; 2],
    instant: [Format; 2],
}

impl CellStyles {
    fn new() -> Self {
        let base = |bg: Color| {
            Format::new()
                .set_background_color(bg)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        };
        Self {
            text: BAND_BG.map(base),
            date: BAND_BG.map(|bg| base(bg).set_num_format("yyyy-mm-dd")),
            instant: BAND_BG.map(|bg| base(bg).set_num_format("yyyy-mm-dd hh:mm")),
        }
    }
}

/// Export XLSX with a styled header, banded rows, and auto-sized
/// columns.
pub(crate) fn export_xlsx(records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if records.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(HEADER_BG)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let styles = CellStyles::new();
    let rows: Vec<Vec<String>> = records.iter().map(record_to_row).collect();

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let stripe = row_index % 2;
        for (col, value) in values.iter().enumerate() {
            write_cell(worksheet, row, col, value, stripe, &styles)?;
        }
    }

    // Fit each column to its widest cell, header included
    for (col, header) in headers.iter().enumerate() {
        let width = rows
            .iter()
            .map(|r| UnicodeWidthStr::width(r[col].as_str()))
            .fold(UnicodeWidthStr::width(*header), usize::max);
        worksheet
            .set_column_width(col as u16, width as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// The date and timestamp columns become typed Excel values so the
/// spreadsheet can sort and format them; everything else stays text.
/// A value that does not parse falls back to text rather than failing
/// the export.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    value: &str,
    stripe: usize,
    styles: &CellStyles,
) -> AppResult<()> {
    if col == DATE_COL {
        if let Some(serial) = date_serial(value) {
            return worksheet
                .write_with_format(row, col as u16, serial, &styles.date[stripe])
                .map(|_| ())
                .map_err(to_io_app_error);
        }
    }

    if col == TIMESTAMP_COL {
        if let Some(serial) = instant_serial(value) {
            return worksheet
                .write_with_format(row, col as u16, serial, &styles.instant[stripe])
                .map(|_| ())
                .map_err(to_io_app_error);
        }
    }

    worksheet
        .write_with_format(row, col as u16, value, &styles.text[stripe])
        .map(|_| ())
        .map_err(to_io_app_error)
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
