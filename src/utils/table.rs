//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table whose columns are sized to their widest cell.
    pub fn fitted(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }

        let columns = headers
            .iter()
            .zip(widths)
            .map(|(h, width)| Column {
                header: h.to_string(),
                width,
            })
            .collect();

        Self { columns, rows }
    }

    /// Render with a rule of `separator` under the header row.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rule
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let sep = separator.chars().next().unwrap_or('-');
        out.push_str(&sep.to_string().repeat(total.max(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Left-pad to a display width, not a char count, so wide glyphs keep
/// the columns aligned.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = String::from(s);
    for _ in w..width {
        out.push(' ');
    }
    out
}
