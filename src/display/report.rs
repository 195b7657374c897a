//! Terminal rendering of the analytics table
//!
//! Shows the user what is about to be written to the spreadsheet.

use crate::reports::{AnalyticsReport, TOTAL_ROW_LABEL};

/// Format the analytics table for terminal display
pub fn format_analytics(report: &AnalyticsReport) -> String {
    let mut output = String::new();

    output.push_str("Analytics Summary\n");
    output.push_str(&"=".repeat(78));
    output.push('\n');
    output.push_str(&format!(
        "Previous-month baseline: {:.2}\n\n",
        report.baseline
    ));

    output.push_str(&format!(
        "{:<26} {:>10} {:>10} {:>10} {:>10}  {}\n",
        "Category", "Total", "Min", "Max", "Change", "Comparison"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for row in &report.rows {
        output.push_str(&format!(
            "{:<26} {:>10.2} {:>10.2} {:>10.2} {:>10.2}  {}\n",
            row.category, row.total, row.min, row.max, row.change, row.comparison
        ));
    }

    output.push_str(&"-".repeat(78));
    output.push('\n');
    output.push_str(&format!(
        "{:<26} {:>10.2}\n",
        TOTAL_ROW_LABEL, report.grand_total
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Month};

    #[test]
    fn test_format_analytics_lists_rows_and_total() {
        let records = vec![
            ExpenseRecord::new(Month::March, "Food", 50.0, ""),
            ExpenseRecord::new(Month::March, "Rent", 1000.0, ""),
        ];
        let report = AnalyticsReport::generate(&records, 3000.0);

        let rendered = format_analytics(&report);

        assert!(rendered.contains("Previous-month baseline: 3000.00"));
        assert!(rendered.contains("Food"));
        assert!(rendered.contains("Rent"));
        assert!(rendered.contains("Less than last month"));
        assert!(rendered.contains(TOTAL_ROW_LABEL));
        assert!(rendered.contains("1050.00"));
    }

    #[test]
    fn test_format_analytics_without_rows() {
        let report = AnalyticsReport::generate(&[], 3000.0);
        let rendered = format_analytics(&report);

        assert!(rendered.contains(TOTAL_ROW_LABEL));
        assert!(rendered.contains("0.00"));
    }
}
