//! Spreadsheet export for tally
//!
//! Serializes a session's raw entries and analytics table into a styled
//! two-sheet xlsx document.

pub mod excel;

pub use excel::{output_filename, write_workbook, ANALYTICS_SHEET_NAME, RAW_SHEET_NAME};
