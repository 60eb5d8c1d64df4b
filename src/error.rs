//! Error types of the table and its loader.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to materialize a buffer from a source file.
///
/// No table is produced when a load fails; the caller decides whether to retry
/// with a corrected path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read file `{}`", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "short read from `{}`: expected {expected} code units, got {actual}",
        .path.display()
    )]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// A snapshot was applied to a table holding a different number of lines.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("snapshot holds {snapshot} lines but the table holds {table}")]
pub struct SizeMismatch {
    pub snapshot: usize,
    pub table: usize,
}

/// A snapshot could not be reinstated; the table's order is left as it was.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RestoreError {
    #[error(transparent)]
    SizeMismatch(#[from] SizeMismatch),

    /// The snapshot holds a view outside this table's buffer: it was taken from
    /// another table.
    #[error(
        "snapshot line {index} spans units {start}..{end}, outside a buffer of {buffer_len} units"
    )]
    ForeignView {
        index: usize,
        start: usize,
        end: usize,
        buffer_len: usize,
    },
}
