//! Column alignment: compute each column's target width and pad every cell
//! to it.

use crate::parse::{Column, ParsedTable};

const DASH: &str = "-";

/// Minimum column width, so the delimiter row always renders as at least
/// `---`.
pub(crate) const MIN_WIDTH: usize = 3;

/// Alignment options.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Minimum column width (default: 3)
    pub min_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            min_width: MIN_WIDTH,
        }
    }
}

impl FormatOptions {
    /// Set the minimum column width
    #[must_use]
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }
}

/// Width of the widest cell in the column (header included), floored at
/// `min`. Widths count characters, not display columns.
fn column_width(column: &Column, min: usize) -> usize {
    std::iter::once(&column.header)
        .chain(column.body.iter())
        .map(|cell| cell.chars().count())
        .fold(min, usize::max)
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

/// Pad every cell of every column to that column's target width and
/// regenerate the delimiter cells as dash runs. Columns are independent and
/// keep their order.
pub(crate) fn align(table: &ParsedTable, options: FormatOptions) -> ParsedTable {
    let columns = table
        .columns
        .iter()
        .map(|column| {
            let width = column_width(column, options.min_width);
            Column {
                header: pad(&column.header, width),
                delimiter: DASH.repeat(width),
                body: column.body.iter().map(|cell| pad(cell, width)).collect(),
            }
        })
        .collect();
    ParsedTable { columns }
}
