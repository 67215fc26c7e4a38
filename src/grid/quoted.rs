//! Quote-aware CSV tokenizer.

use crate::error::{CsvError, CsvResult};
use crate::grid::Grid;

/// Parse CSV text into a [`Grid`], honoring double-quoted fields.
///
/// Rules:
///
/// - A `"` toggles the inside-quotes state. When immediately followed by
///   another `"`, the pair is an escape: one literal quote is appended and
///   both characters are consumed.
/// - `,` outside quotes ends the current field.
/// - `\n` outside quotes ends the current field and the current row.
/// - `\r` is always skipped, so CRLF input behaves like LF input.
/// - Anything else is appended to the current field.
///
/// Fails with [`CsvError::Format`] when the input ends while still inside
/// a quoted field. A pending field/row at end of input is appended only
/// when non-empty, so input without a trailing newline keeps its last row.
pub fn parse(text: &str) -> CsvResult<Grid> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut inside_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                inside_quotes = !inside_quotes;
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                }
            }
            ',' if !inside_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' if !inside_quotes => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            _ => field.push(c),
        }
    }

    if inside_quotes {
        return Err(CsvError::Format {
            message: "mismatched quotes in csv input".to_string(),
        });
    }

    if !field.is_empty() {
        row.push(field);
    }
    if !row.is_empty() {
        rows.push(row);
    }

    Ok(Grid::from_rows(rows))
}
