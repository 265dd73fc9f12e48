//! Table-level parsing: lines in, column-major [`ParsedTable`] out.

use crate::error::{Result, TableError};
use crate::row::{normalize_row, parse_row};

/// One table column: the header cell, the delimiter cell, and one body cell
/// per body row in original row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    /// Regenerated during alignment; the parser leaves it empty.
    pub delimiter: String,
    pub body: Vec<String>,
}

/// A column-major table. The column count is fixed at parse time and equals
/// the header row's cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub columns: Vec<Column>,
}

/// Swap rows and columns. Missing entries become empty cells; an empty
/// matrix transposes to an empty matrix.
pub(crate) fn transpose(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|x| {
            rows.iter()
                .map(|row| row.get(x).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Parse the full input text into a [`ParsedTable`].
///
/// The first line is the header, the second the delimiter row, everything
/// after is body. Body rows are forced to the header's cell count. Both
/// `\n` and `\r\n` line endings are accepted.
pub fn parse_table(text: &str) -> Result<ParsedTable> {
    let mut lines = text.trim().lines();
    let header = lines
        .next()
        .map(parse_row)
        .ok_or(TableError::MissingHeader)?;
    let delimiter = lines
        .next()
        .map(parse_row)
        .ok_or(TableError::MissingDelimiter)?;
    if header.is_empty() || header.len() != delimiter.len() {
        return Err(TableError::ColumnCount {
            header: header.len(),
            delimiter: delimiter.len(),
        });
    }

    let body: Vec<Vec<String>> = lines
        .map(|line| normalize_row(parse_row(line), header.len()))
        .collect();
    let mut body_columns = transpose(&body).into_iter();

    let columns = header
        .into_iter()
        .map(|heading| Column {
            header: heading,
            delimiter: String::new(),
            body: body_columns.next().unwrap_or_default(),
        })
        .collect();
    Ok(ParsedTable { columns })
}
