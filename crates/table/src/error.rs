use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table has no header row")]
    MissingHeader,

    #[error("table has no delimiter row")]
    MissingDelimiter,

    #[error("invalid column count: header has {header} columns, delimiter has {delimiter}")]
    ColumnCount { header: usize, delimiter: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
