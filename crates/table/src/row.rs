//! Line-level parsing: splitting a text line into cells and forcing a row
//! to a fixed cell count.

const BAR: char = '|';

/// Split one line into trimmed cells.
///
/// An empty first or last fragment comes from a leading/trailing bar and is
/// a border marker, not a cell; a non-empty one (line without a border) is a
/// real cell. Bars cannot be escaped.
pub(crate) fn parse_row(line: &str) -> Vec<String> {
    let fragments: Vec<&str> = line.trim().split(BAR).collect();
    let first = fragments.first().copied().unwrap_or_default();
    let last = fragments.last().copied().unwrap_or_default();

    let mut cells: Vec<&str> = if fragments.len() > 2 {
        fragments[1..fragments.len() - 1].to_vec()
    } else {
        Vec::new()
    };
    if !first.is_empty() {
        cells.insert(0, first);
    }
    if !last.is_empty() {
        cells.push(last);
    }

    cells.into_iter().map(|cell| cell.trim().to_string()).collect()
}

/// Force `row` to exactly `len` cells: pad with empty strings, or keep only
/// the first `len` cells when the row is longer. `len == 0` always yields an
/// empty row.
pub(crate) fn normalize_row(mut row: Vec<String>, len: usize) -> Vec<String> {
    if row.len() > len {
        row.truncate(len);
    } else {
        row.resize(len, String::new());
    }
    row
}
