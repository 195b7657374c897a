//! Terminal output formatting

pub mod report;

pub use report::format_analytics;
