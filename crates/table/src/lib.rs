//! # pipefmt-table
//!
//! Aligns pipe-delimited (Markdown-style) tables so that every column's
//! cells share a uniform width. The pipeline is parse → normalize → pad →
//! stringify over plain text; there is no I/O and no state between calls.
//!
//! [`format`] never fails: any input that does not parse as a table is
//! returned verbatim. Use [`try_format`] to observe parse errors instead.

pub mod error;

mod align;
mod parse;
mod render;
mod row;

pub use align::FormatOptions;
pub use error::TableError;
pub use parse::{parse_table, Column, ParsedTable};

use error::Result;

/// Format a table, falling back to the unmodified input on any parse error.
pub fn format(text: &str) -> String {
    format_with_options(text, FormatOptions::default())
}

/// [`format`] with explicit options.
pub fn format_with_options(text: &str, options: FormatOptions) -> String {
    match try_format_with_options(text, options) {
        Ok(formatted) => formatted,
        Err(error) => {
            tracing::debug!(%error, "input is not a table, leaving it unchanged");
            text.to_string()
        }
    }
}

/// Format a table, propagating parse errors to the caller.
pub fn try_format(text: &str) -> Result<String> {
    try_format_with_options(text, FormatOptions::default())
}

/// [`try_format`] with explicit options.
pub fn try_format_with_options(text: &str, options: FormatOptions) -> Result<String> {
    let table = parse_table(text)?;
    Ok(render::render(&align::align(&table, options)))
}
