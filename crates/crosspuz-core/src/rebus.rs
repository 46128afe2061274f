//! Rebus extension construction
//!
//! The interchange format stores rebus data in two sections: a board array
//! with one byte per cell, and a side table mapping indices to full
//! answers. The board uses an offset-by-one convention: `0` means "no rebus
//! here" and real entries store `table index + 1`, while the table itself
//! stays 0-based. Downstream serializers depend on that offset; it is part
//! of the format, not something to normalize away.

use crate::cell::{CellKind, GridCell};
use crate::error::{PuzzleError, Result};
use std::fmt::Write;

/// Dense 0-based mapping from rebus index to full answer
///
/// Indices are assigned strictly in the order rebus cells are encountered
/// scanning the grid row-major; no index is skipped or reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebusTable {
    entries: Vec<String>,
}

impl RebusTable {
    /// Create an empty table
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append the next answer, returning its assigned index
    pub fn push(&mut self, answer: String) -> usize {
        self.entries.push(answer);
        self.entries.len() - 1
    }

    /// Look up an answer by its 0-based index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of entries in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the table body as the interchange format stores it
    ///
    /// Each entry is `%2d:answer;` with the index space-padded to two
    /// characters, e.g. `" 0:HEART; 1:CLUB;"`.
    #[must_use = "returns the serialized table body"]
    pub fn to_rtbl_string(&self) -> String {
        let mut out = String::new();
        for (index, answer) in self.entries.iter().enumerate() {
            // write! to a String cannot fail
            let _ = write!(out, "{index:2}:{answer};");
        }
        out
    }
}

/// The two rebus sections handed to the byte serializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebusExtension {
    /// One byte per cell: `0` for no rebus, `table index + 1` otherwise
    pub board: Vec<u8>,
    /// Index-to-answer table, 0-based
    pub table: RebusTable,
}

/// Build the rebus extension for a cell sequence
///
/// Scans row-major; each rebus cell gets the next unused index starting at
/// 0 and its full answer is appended to the table. Returns `Ok(None)` when
/// the grid has no rebus cell, in which case the puzzle omits the extension
/// entirely.
///
/// # Errors
/// Returns `PuzzleError::Invariant` if the grid has more than 255 distinct
/// rebus cells; the one-byte board cannot represent further indices and
/// truncating would corrupt the output.
pub fn encode_rebus(cells: &[GridCell]) -> Result<Option<RebusExtension>> {
    let mut board = vec![0u8; cells.len()];
    let mut table = RebusTable::new();

    for (position, cell) in cells.iter().enumerate() {
        if let CellKind::Rebus { full, .. } = &cell.kind {
            let index = table.push(full.clone());
            board[position] = u8::try_from(index + 1).map_err(|_| {
                PuzzleError::Invariant(format!(
                    "rebus cell at position {position} needs index {index}, beyond the one-byte board range"
                ))
            })?;
        }
    }

    if table.is_empty() {
        Ok(None)
    } else {
        log::debug!("rebus extension: {} entries", table.len());
        Ok(Some(RebusExtension { board, table }))
    }
}
