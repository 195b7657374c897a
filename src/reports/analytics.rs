//! Per-category expense analytics
//!
//! Groups a session's expense records by category, computes sum/min/max per
//! group, compares each total against the injected previous-month baseline,
//! and appends a grand-total row.

use std::collections::HashMap;
use std::fmt;

use crate::models::ExpenseRecord;

/// Category label of the synthetic grand-total row
pub const TOTAL_ROW_LABEL: &str = "Total Expense This Month";

/// How a category total relates to the previous-month baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    MoreThanLastMonth,
    LessThanLastMonth,
    SameAsLastMonth,
}

impl Comparison {
    /// Derive the comparison from the exact sign of the change
    ///
    /// Exact zero is its own case; there is no epsilon tolerance.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::MoreThanLastMonth
        } else if change < 0.0 {
            Self::LessThanLastMonth
        } else {
            Self::SameAsLastMonth
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoreThanLastMonth => write!(f, "More than last month"),
            Self::LessThanLastMonth => write!(f, "Less than last month"),
            Self::SameAsLastMonth => write!(f, "Same as last month"),
        }
    }
}

/// Aggregate statistics for one expense category
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// Category label (exact string match groups records)
    pub category: String,
    /// Sum of amounts in this category
    pub total: f64,
    /// Smallest single amount in this category
    pub min: f64,
    /// Largest single amount in this category
    pub max: f64,
    /// Previous-month baseline the total is compared to
    pub baseline: f64,
    /// total - baseline
    pub change: f64,
    /// Sign of the change, as a label
    pub comparison: Comparison,
}

/// The analytics table: one row per category plus a grand total
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    /// Baseline applied to every category row
    pub baseline: f64,
    /// Category rows in ascending category-name order
    pub rows: Vec<CategoryRow>,
    /// Sum of all per-category totals
    pub grand_total: f64,
}

impl AnalyticsReport {
    /// Generate the analytics table for a session's records
    ///
    /// Records whose amount is not a finite number are dropped from the
    /// aggregation (they still appear verbatim on the raw sheet). If every
    /// record is dropped the report has no category rows and a grand total
    /// of zero.
    pub fn generate(records: &[ExpenseRecord], baseline: f64) -> Self {
        let mut groups: HashMap<&str, (f64, f64, f64)> = HashMap::new();

        for record in records.iter().filter(|r| r.amount.is_finite()) {
            let entry = groups
                .entry(record.category.as_str())
                .or_insert((0.0, record.amount, record.amount));
            entry.0 += record.amount;
            entry.1 = entry.1.min(record.amount);
            entry.2 = entry.2.max(record.amount);
        }

        let mut rows: Vec<CategoryRow> = groups
            .into_iter()
            .map(|(category, (total, min, max))| {
                let change = total - baseline;
                CategoryRow {
                    category: category.to_string(),
                    total,
                    min,
                    max,
                    baseline,
                    change,
                    comparison: Comparison::from_change(change),
                }
            })
            .collect();

        // Grouping order is pinned: ascending category name
        rows.sort_by(|a, b| a.category.cmp(&b.category));

        let grand_total = rows.iter().map(|r| r.total).sum();

        Self {
            baseline,
            rows,
            grand_total,
        }
    }
}
