//! Errors raised while reading listing CSV files.

use camino::Utf8PathBuf;
use thiserror::Error;

/// File-level failures; bad cells are never reported here.
///
/// A cell that cannot be parsed drops its record later, during
/// normalization. Only problems that make the whole file unreadable stop a
/// load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The header row lacks a required column.
    #[error(
        "missing required column `{column}`; expected a header named {}",
        .aliases.join(" or ")
    )]
    MissingColumn {
        /// Logical column name.
        column: &'static str,
        /// Header spellings accepted for the column.
        aliases: &'static [&'static str],
    },
    /// The input file could not be opened.
    #[error("failed to open listings file at {path}")]
    Open {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read CSV header")]
    ReadHeader {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A data row could not be read from the underlying stream.
    #[error("failed to read CSV data row {row}")]
    ReadRow {
        /// One-based data row, excluding the header.
        row: usize,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}
