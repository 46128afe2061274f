//! Canonical puzzle assembly and the serializer boundary
//!
//! [`CanonicalPuzzle`] is the single artifact handed to the byte-level
//! interchange serializer. Assembly derives the flattened solution/fill
//! strings from the cell sequence, attaches whichever extension sections
//! are non-empty, and validates the grid invariants. A violation here is an
//! adapter defect, not a user-facing condition; assembly fails loudly and
//! never returns a partial puzzle.

use crate::cell::GridCell;
use crate::error::{PuzzleError, Result};
use crate::markup::encode_markup;
use crate::metadata::PuzzleMetadata;
use crate::rebus::{encode_rebus, RebusExtension};

/// Section name for the circled-square bitmap
pub const SECTION_MARKUP: &str = "GEXT";
/// Section name for the rebus board array
pub const SECTION_REBUS_BOARD: &str = "GRBS";
/// Section name for the rebus index table
pub const SECTION_REBUS_TABLE: &str = "RTBL";

/// Fully normalized puzzle, frozen after assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPuzzle {
    /// Puzzle metadata (dimensions, byline, title, date)
    pub metadata: PuzzleMetadata,
    /// One character per cell: `.` for blocks, the (displayed) answer otherwise
    pub solution: String,
    /// One character per cell: `.` for blocks, the `-` placeholder otherwise
    pub fill: String,
    /// Final ordered clue texts
    pub clues: Vec<String>,
    /// Circled-square bitmap, present only if any cell is circled
    pub markup: Option<Vec<u8>>,
    /// Rebus board and table, present only if any rebus cell exists
    pub rebus: Option<RebusExtension>,
}

/// One named extension section in serializer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSection {
    /// Four-character section name
    pub name: &'static str,
    /// Section payload bytes
    pub data: Vec<u8>,
}

/// Byte-level interchange writer, implemented outside this crate
///
/// The serializer owns the fixed file layout, string tables, and checksum
/// computation; this crate's sole obligation is to hand it an
/// invariant-satisfying [`CanonicalPuzzle`] with its extension sections in
/// the order [`CanonicalPuzzle::extension_sections`] yields them.
pub trait PuzzleSink {
    /// Write one puzzle
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    fn write_puzzle(&mut self, puzzle: &CanonicalPuzzle) -> Result<()>;
}

impl CanonicalPuzzle {
    /// Assemble a puzzle from adapter output
    ///
    /// Derives the flattened strings, runs the rebus and markup encoders,
    /// and validates every grid invariant. The clue list must already be in
    /// final order.
    ///
    /// # Errors
    /// Returns `PuzzleError::Invariant` if the cell count does not match
    /// the declared dimensions or the clue count does not match the number
    /// of numbered entry points the grid implies. Either indicates a bug in
    /// the producing adapter.
    pub fn assemble(
        metadata: PuzzleMetadata,
        cells: &[GridCell],
        clues: Vec<String>,
    ) -> Result<Self> {
        let expected = metadata.cell_count();
        if cells.len() != expected {
            return Err(PuzzleError::Invariant(format!(
                "{}x{} grid needs {expected} cells, adapter produced {}",
                metadata.width,
                metadata.height,
                cells.len()
            )));
        }

        let entry_points = numbered_entry_points(metadata.width, metadata.height, cells);
        if clues.len() != entry_points {
            return Err(PuzzleError::Invariant(format!(
                "grid implies {entry_points} clues, adapter produced {}",
                clues.len()
            )));
        }

        let solution: String = cells.iter().map(GridCell::solution_char).collect();
        let fill: String = cells.iter().map(GridCell::fill_char).collect();
        debug_assert_eq!(solution.chars().count(), expected);
        debug_assert_eq!(fill.chars().count(), expected);

        let markup = encode_markup(cells);
        let rebus = encode_rebus(cells)?;

        log::debug!(
            "assembled {}x{} puzzle: {} clues, markup={}, rebus={}",
            metadata.width,
            metadata.height,
            clues.len(),
            markup.is_some(),
            rebus.is_some()
        );

        Ok(Self {
            metadata,
            solution,
            fill,
            clues,
            markup,
            rebus,
        })
    }

    /// Grid width in cells
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.metadata.width
    }

    /// Grid height in cells
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.metadata.height
    }

    /// The present extension sections, in the order the format requires
    ///
    /// Circled-square bitmap first, then the rebus board, then the rebus
    /// table. Absent extensions yield no section at all.
    #[must_use = "returns the sections the serializer must write"]
    pub fn extension_sections(&self) -> Vec<ExtensionSection> {
        let mut sections = Vec::new();
        if let Some(markup) = &self.markup {
            sections.push(ExtensionSection {
                name: SECTION_MARKUP,
                data: markup.clone(),
            });
        }
        if let Some(rebus) = &self.rebus {
            sections.push(ExtensionSection {
                name: SECTION_REBUS_BOARD,
                data: rebus.board.clone(),
            });
            sections.push(ExtensionSection {
                name: SECTION_REBUS_TABLE,
                data: rebus.table.to_rtbl_string().into_bytes(),
            });
        }
        sections
    }
}

/// Count the numbered entry points a grid implies
///
/// Canonical numbering: a cell starts an across entry if it is not a block,
/// has a block or the grid edge to its left, and a non-block cell to its
/// right; symmetrically for down. Every entry start carries exactly one
/// clue, so the total is the expected clue count.
#[must_use = "returns the clue count the grid implies"]
pub fn numbered_entry_points(width: usize, height: usize, cells: &[GridCell]) -> usize {
    let blocked = |row: usize, col: usize| -> bool {
        cells
            .get(row * width + col)
            .is_none_or(GridCell::is_block)
    };

    let mut count = 0;
    for row in 0..height {
        for col in 0..width {
            if blocked(row, col) {
                continue;
            }
            let starts_across = (col == 0 || blocked(row, col - 1))
                && col + 1 < width
                && !blocked(row, col + 1);
            let starts_down = (row == 0 || blocked(row - 1, col))
                && row + 1 < height
                && !blocked(row + 1, col);
            count += usize::from(starts_across) + usize::from(starts_down);
        }
    }
    count
}
