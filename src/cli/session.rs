//! The interactive expense-entry session
//!
//! Control flows strictly top to bottom: collect the month, collect the
//! entries, aggregate, display, write the workbook. A failed save is
//! reported on the console and ends the run; it does not propagate.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::display;
use crate::error::TallyResult;
use crate::export::{self, ANALYTICS_SHEET_NAME, RAW_SHEET_NAME};
use crate::input;
use crate::reports::AnalyticsReport;

/// Resolved options for one session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Previous-month baseline for the comparison column
    pub baseline: f64,
    /// Directory the spreadsheet is written into
    pub output_dir: PathBuf,
    /// Prefix prepended to the output filename
    pub filename_prefix: String,
}

/// Run one interactive session end to end
///
/// An empty collection (the user typed the sentinel immediately) skips
/// writing and prints an explicit no-data notice.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> TallyResult<()> {
    let month = input::collect_month(input, output)?;
    let records = input::collect_entries(input, output, month)?;

    if records.is_empty() {
        writeln!(output, "No data entered. Nothing to save.")?;
        return Ok(());
    }

    let report = AnalyticsReport::generate(&records, options.baseline);

    writeln!(output)?;
    output.write_all(display::format_analytics(&report).as_bytes())?;
    writeln!(output)?;

    match export::write_workbook(
        &records,
        &report,
        month,
        &options.output_dir,
        &options.filename_prefix,
    ) {
        Ok(path) => {
            writeln!(output, "Saved successfully to: {}", path.display())?;
            writeln!(
                output,
                "Sheets in file: {}, {}",
                RAW_SHEET_NAME, ANALYTICS_SHEET_NAME
            )?;
        }
        Err(err) => {
            writeln!(output, "Error saving file: {}", err)?;
        }
    }

    Ok(())
}
