//! Styled xlsx output
//!
//! Builds the whole workbook in memory and saves it exactly once: the raw
//! entries sheet, the analytics sheet, column widths, and the analytics
//! styling are all applied before the single save. Any file already at the
//! target path is overwritten.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};

use crate::error::TallyResult;
use crate::models::{ExpenseRecord, Month};
use crate::reports::{AnalyticsReport, Comparison, TOTAL_ROW_LABEL};

/// Sheet holding the session's records verbatim
pub const RAW_SHEET_NAME: &str = "Raw Entries";

/// Sheet holding the per-category aggregate table
pub const ANALYTICS_SHEET_NAME: &str = "Analytics";

const RAW_HEADERS: [&str; 5] = ["Date", "Month", "Category", "Amount", "Notes"];
const ANALYTICS_HEADERS: [&str; 7] = [
    "Category",
    "Total",
    "Min",
    "Max",
    "Previous Month",
    "Change",
    "Comparison",
];

// Comparison fills: red when spending rose above the baseline, green when
// it fell below, gray when it matched.
const MORE_FILL: u32 = 0xFFC7CE;
const LESS_FILL: u32 = 0xC6EFCE;
const NEUTRAL_FILL: u32 = 0xD9D9D9;

/// Build the output filename for a month and year
pub fn output_filename(prefix: &str, month: Month, year: i32) -> String {
    format!("{}Expenses_{}_{}.xlsx", prefix, month, year)
}

/// Write the two-sheet workbook and return the path it was saved to
///
/// The filename embeds the session month and the current year, so running
/// twice for the same month in the same year overwrites the first file.
pub fn write_workbook(
    records: &[ExpenseRecord],
    report: &AnalyticsReport,
    month: Month,
    dir: &Path,
    prefix: &str,
) -> TallyResult<PathBuf> {
    let year = Local::now().year();
    let path = dir.join(output_filename(prefix, month, year));

    let mut workbook = Workbook::new();
    write_raw_sheet(workbook.add_worksheet(), records)?;
    write_analytics_sheet(workbook.add_worksheet(), report)?;
    workbook.save(&path)?;

    Ok(path)
}

/// Write the raw entries sheet: records verbatim, in entry order
fn write_raw_sheet(sheet: &mut Worksheet, records: &[ExpenseRecord]) -> Result<(), XlsxError> {
    sheet.set_name(RAW_SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let mut widths = ColumnWidths::new(RAW_HEADERS.len());

    for (col, header) in RAW_HEADERS.iter().enumerate() {
        widths.observe(col, header);
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let date = record.date.to_string();
        let month = record.month.to_string();

        widths.observe(0, &date);
        widths.observe(1, &month);
        widths.observe(2, &record.category);
        widths.observe(3, &number_text(record.amount));
        widths.observe(4, &record.notes);

        sheet.write_string(row, 0, &date)?;
        sheet.write_string(row, 1, &month)?;
        sheet.write_string(row, 2, &record.category)?;
        write_amount(sheet, row, 3, record.amount)?;
        sheet.write_string(row, 4, &record.notes)?;
    }

    widths.apply(sheet)
}

/// Write the analytics sheet: category rows, then the styled total row
fn write_analytics_sheet(sheet: &mut Worksheet, report: &AnalyticsReport) -> Result<(), XlsxError> {
    sheet.set_name(ANALYTICS_SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let total_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(NEUTRAL_FILL));

    let mut widths = ColumnWidths::new(ANALYTICS_HEADERS.len());

    for (col, header) in ANALYTICS_HEADERS.iter().enumerate() {
        widths.observe(col, header);
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in report.rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        let label = row.comparison.to_string();

        widths.observe(0, &row.category);
        widths.observe(1, &number_text(row.total));
        widths.observe(2, &number_text(row.min));
        widths.observe(3, &number_text(row.max));
        widths.observe(4, &number_text(row.baseline));
        widths.observe(5, &number_text(row.change));
        widths.observe(6, &label);

        sheet.write_string(row_num, 0, &row.category)?;
        sheet.write_number(row_num, 1, row.total)?;
        sheet.write_number(row_num, 2, row.min)?;
        sheet.write_number(row_num, 3, row.max)?;
        sheet.write_number(row_num, 4, row.baseline)?;
        sheet.write_number(row_num, 5, row.change)?;
        sheet.write_string_with_format(row_num, 6, &label, &comparison_fill(row.comparison))?;
    }

    // Grand-total row: label merged across the first three columns, bold
    // gray fill across the whole row, every other cell blank.
    let total_row = (report.rows.len() + 1) as u32;
    widths.observe(0, TOTAL_ROW_LABEL);
    widths.observe(1, &number_text(report.grand_total));

    sheet.merge_range(total_row, 0, total_row, 2, TOTAL_ROW_LABEL, &total_format)?;
    for col in 3..ANALYTICS_HEADERS.len() as u16 {
        sheet.write_string_with_format(total_row, col, "", &total_format)?;
    }

    widths.apply(sheet)
}

/// Fill color for a comparison cell
fn comparison_fill(comparison: Comparison) -> Format {
    let color = match comparison {
        Comparison::MoreThanLastMonth => MORE_FILL,
        Comparison::LessThanLastMonth => LESS_FILL,
        Comparison::SameAsLastMonth => NEUTRAL_FILL,
    };
    Format::new().set_background_color(Color::RGB(color))
}

/// Write an amount cell
///
/// Excel has no representation for NaN or infinity, so non-finite amounts
/// are written as their textual form; they are already excluded from the
/// analytics sheet.
fn write_amount(sheet: &mut Worksheet, row: u32, col: u16, amount: f64) -> Result<(), XlsxError> {
    if amount.is_finite() {
        sheet.write_number(row, col, amount)?;
    } else {
        sheet.write_string(row, col, amount.to_string())?;
    }
    Ok(())
}

/// Textual form of a number, used for column width sizing
fn number_text(value: f64) -> String {
    value.to_string()
}

/// Tracks the maximum textual cell length per column
///
/// Display width is the maximum length plus 2; empty cells count as
/// length 0.
struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    fn new(columns: usize) -> Self {
        Self {
            widths: vec![0; columns],
        }
    }

    fn observe(&mut self, col: usize, text: &str) {
        let len = text.chars().count();
        if len > self.widths[col] {
            self.widths[col] = len;
        }
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        for (col, width) in self.widths.iter().enumerate() {
            sheet.set_column_width(col as u16, (width + 2) as f64)?;
        }
        Ok(())
    }
}
