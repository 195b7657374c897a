//! Interactive input collection
//!
//! Gathers a validated month and a sequence of expense records from
//! sequential prompts. Both collectors are generic over the reader and
//! writer so tests can drive them with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{TallyError, TallyResult};
use crate::models::{ExpenseRecord, Month};

/// Sentinel the user types to finish entering expenses
pub const DONE_SENTINEL: &str = "done";

/// Prompt until the input parses as a canonical month name
///
/// Loops indefinitely on invalid input; never returns an invalid month.
pub fn collect_month<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> TallyResult<Month> {
    loop {
        let line = prompt_line(input, output, "Enter month name (e.g., August): ")?;
        match line.parse::<Month>() {
            Ok(month) => return Ok(month),
            Err(_) => {
                writeln!(
                    output,
                    "Invalid month. Please enter a valid month name (e.g., April, August)."
                )?;
            }
        }
    }
}

/// Collect expense records until the user types the done sentinel
///
/// Each cycle reads a category, an amount, and free-text notes. Empty
/// category or amount, or a non-numeric amount, prints a warning and
/// restarts the cycle without appending a record. Typing the sentinel as
/// the category ends the loop immediately, so an empty vec is a valid
/// result the caller must treat as nothing-to-save.
pub fn collect_entries<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    month: Month,
) -> TallyResult<Vec<ExpenseRecord>> {
    let mut entries = Vec::new();

    writeln!(output)?;
    writeln!(
        output,
        "Enter your expenses (type '{}' to finish):",
        DONE_SENTINEL
    )?;

    loop {
        let category = prompt_line(input, output, "Category: ")?;
        if category.to_lowercase() == DONE_SENTINEL {
            break;
        }

        let amount_raw = prompt_line(input, output, "Amount: ")?;
        let notes = prompt_line(input, output, "Notes: ")?;

        if category.is_empty() || amount_raw.is_empty() {
            writeln!(output, "Category and Amount are required. Try again.")?;
            writeln!(output)?;
            continue;
        }

        let amount: f64 = match amount_raw.parse() {
            Ok(value) => value,
            Err(_) => {
                writeln!(output, "Amount must be a number. Try again.")?;
                writeln!(output)?;
                continue;
            }
        };

        entries.push(ExpenseRecord::new(month, category, amount, notes));
        writeln!(output, "Entry added.")?;
        writeln!(output)?;
    }

    Ok(entries)
}

/// Print a prompt, flush, and read one trimmed line
///
/// An exhausted input stream is an I/O error rather than a silent empty
/// line, so the collector loops cannot spin forever on EOF.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> TallyResult<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(TallyError::Io("unexpected end of input".into()));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_collect_month(script: &str) -> (TallyResult<Month>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let result = collect_month(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    fn run_collect_entries(script: &str, month: Month) -> (TallyResult<Vec<ExpenseRecord>>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let result = collect_entries(&mut input, &mut output, month);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collect_month_accepts_valid_input() {
        let (result, _) = run_collect_month("August\n");
        assert_eq!(result.unwrap(), Month::August);
    }

    #[test]
    fn test_collect_month_reprompts_until_valid() {
        let (result, output) = run_collect_month("Aug\nnotamonth\n  february \n");
        assert_eq!(result.unwrap(), Month::February);
        assert_eq!(output.matches("Invalid month").count(), 2);
    }

    #[test]
    fn test_collect_month_eof_is_io_error() {
        let (result, _) = run_collect_month("");
        assert!(matches!(result.unwrap_err(), TallyError::Io(_)));
    }

    #[test]
    fn test_done_first_yields_empty_sequence() {
        let (result, _) = run_collect_entries("done\n", Month::January);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_done_is_case_insensitive() {
        let (result, _) = run_collect_entries("DONE\n", Month::January);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_collects_entries_until_done() {
        let script = "Food\n50\nlunch\nRent\n1000\n\ndone\n";
        let (result, output) = run_collect_entries(script, Month::March);
        let entries = result.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "Food");
        assert_eq!(entries[0].amount, 50.0);
        assert_eq!(entries[0].notes, "lunch");
        assert_eq!(entries[1].category, "Rent");
        assert_eq!(entries[1].amount, 1000.0);
        assert!(entries[1].notes.is_empty());
        assert_eq!(output.matches("Entry added.").count(), 2);
    }

    #[test]
    fn test_non_numeric_amount_warns_and_reprompts() {
        let script = "Food\nabc\nnote\nFood\n12.5\nnote\ndone\n";
        let (result, output) = run_collect_entries(script, Month::April);
        let entries = result.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, 12.5);
        assert!(output.contains("Amount must be a number. Try again."));
    }

    #[test]
    fn test_empty_amount_warns_and_reprompts() {
        let script = "Food\n\nnote\ndone\n";
        let (result, output) = run_collect_entries(script, Month::April);

        assert!(result.unwrap().is_empty());
        assert!(output.contains("Category and Amount are required. Try again."));
    }

    #[test]
    fn test_empty_category_warns_and_reprompts() {
        let script = "\n10\nnote\ndone\n";
        let (result, output) = run_collect_entries(script, Month::April);

        assert!(result.unwrap().is_empty());
        assert!(output.contains("Category and Amount are required. Try again."));
    }

    #[test]
    fn test_negative_amounts_are_accepted() {
        let script = "Refunds\n-25.50\nreturned kettle\ndone\n";
        let (result, _) = run_collect_entries(script, Month::June);
        let entries = result.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, -25.5);
    }
}
