//! Rendering a [`ParsedTable`] back to text.

use crate::parse::{transpose, ParsedTable};

const BAR: &str = "|";

/// Render one row as `| cell | cell | ... |`.
fn render_row(cells: &[String]) -> String {
    let mut parts = Vec::with_capacity(cells.len() * 2 + 1);
    parts.push(BAR);
    for cell in cells {
        parts.push(cell.as_str());
        parts.push(BAR);
    }
    parts.join(" ")
}

/// Render header, delimiter, then body rows, joined with `\n` and without a
/// trailing newline. Body rows come from transposing the column-major data
/// back to row-major order.
pub(crate) fn render(table: &ParsedTable) -> String {
    let header: Vec<String> = table.columns.iter().map(|c| c.header.clone()).collect();
    let delimiter: Vec<String> = table.columns.iter().map(|c| c.delimiter.clone()).collect();
    let body_columns: Vec<Vec<String>> = table.columns.iter().map(|c| c.body.clone()).collect();

    let mut lines = vec![render_row(&header), render_row(&delimiter)];
    lines.extend(transpose(&body_columns).iter().map(|row| render_row(row)));
    lines.join("\n")
}
