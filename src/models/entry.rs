//! Expense record model
//!
//! One record per prompt cycle. Records are immutable once created and live
//! only for the session; they are not persisted between runs.

use chrono::{Local, NaiveDate};

use super::month::Month;

/// A single expense line item
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Calendar date the entry was recorded (stamped at creation)
    pub date: NaiveDate,

    /// The month the session is logging expenses for
    pub month: Month,

    /// Free-text category label
    pub category: String,

    /// Amount spent (negative values represent refunds)
    pub amount: f64,

    /// Free-text notes
    pub notes: String,
}

impl ExpenseRecord {
    /// Create a new record stamped with today's date
    pub fn new(
        month: Month,
        category: impl Into<String>,
        amount: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self::with_date(Local::now().date_naive(), month, category, amount, notes)
    }

    /// Create a record with an explicit date (useful for testing)
    pub fn with_date(
        date: NaiveDate,
        month: Month,
        category: impl Into<String>,
        amount: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date,
            month,
            category: category.into(),
            amount,
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_today() {
        let record = ExpenseRecord::new(Month::May, "Food", 12.5, "lunch");

        assert_eq!(record.date, Local::now().date_naive());
        assert_eq!(record.month, Month::May);
        assert_eq!(record.category, "Food");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.notes, "lunch");
    }

    #[test]
    fn test_with_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let record = ExpenseRecord::with_date(date, Month::March, "Rent", 1000.0, "");

        assert_eq!(record.date, date);
        assert!(record.notes.is_empty());
    }
}
