//! Calendar month names
//!
//! A validated month is the first thing a session collects; every expense
//! record carries one.

use std::fmt;
use std::str::FromStr;

/// One of the twelve canonical month names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The capitalized English name of the month
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Parse a month from user input
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive,
    /// but the full English name is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MonthParseError(trimmed.to_string()))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month name: {}", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        for month in Month::ALL {
            assert_eq!(month.name().parse::<Month>().unwrap(), month);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("august".parse::<Month>().unwrap(), Month::August);
        assert_eq!("APRIL".parse::<Month>().unwrap(), Month::April);
        assert_eq!("dEcEmBeR".parse::<Month>().unwrap(), Month::December);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!("  March  ".parse::<Month>().unwrap(), Month::March);
        assert_eq!("\tJune\n".parse::<Month>().unwrap(), Month::June);
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!("Jan".parse::<Month>().is_err());
        assert!("Smarch".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::September.to_string(), "September");
    }

    #[test]
    fn test_parse_error_display() {
        let err = "Smarch".parse::<Month>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid month name: Smarch");
    }
}
