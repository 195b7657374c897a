//! Analytics reports for tally

pub mod analytics;

pub use analytics::{AnalyticsReport, CategoryRow, Comparison, TOTAL_ROW_LABEL};
