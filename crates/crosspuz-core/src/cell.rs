//! Canonical grid cell model
//!
//! Every cell of a crossword grid normalizes to one of three kinds: a block
//! (no content), a single letter, or a rebus whose answer spans multiple
//! characters but occupies one grid position. The circled-square flag is
//! markup carried independently of the cell's content.

use crate::error::{PuzzleError, Result};

/// Content of a single grid position
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Filled square with no letter content
    #[default]
    Block,
    /// Ordinary single-letter square
    Letter(char),
    /// Multi-letter answer in a single square
    ///
    /// `displayed` is always the first character of `full`; the constructor
    /// enforces this, so the two never disagree.
    Rebus {
        /// Character shown in the grid (and written into the solution string)
        displayed: char,
        /// Complete multi-character answer, recorded in the rebus table
        full: String,
    },
}

/// One grid position: content plus circled-square markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// What the cell contains
    pub kind: CellKind,
    /// Whether the cell carries the circled-square markup flag
    pub circled: bool,
}

impl GridCell {
    /// Create a block cell
    #[inline]
    #[must_use = "creates a cell that should be placed in a grid"]
    pub const fn block() -> Self {
        Self {
            kind: CellKind::Block,
            circled: false,
        }
    }

    /// Create a single-letter cell
    #[inline]
    #[must_use = "creates a cell that should be placed in a grid"]
    pub const fn letter(answer: char) -> Self {
        Self {
            kind: CellKind::Letter(answer),
            circled: false,
        }
    }

    /// Create a rebus cell from its full answer
    ///
    /// The displayed character is derived from the answer's first character.
    ///
    /// # Errors
    /// Returns `PuzzleError::Invariant` if `full` has fewer than two
    /// characters; such answers are plain letters, not rebuses.
    pub fn rebus(full: &str) -> Result<Self> {
        let mut chars = full.chars();
        let displayed = chars.next().ok_or_else(|| {
            PuzzleError::Invariant("rebus answer must not be empty".to_string())
        })?;
        if chars.next().is_none() {
            return Err(PuzzleError::Invariant(format!(
                "rebus answer '{full}' has a single character; use a letter cell"
            )));
        }
        Ok(Self {
            kind: CellKind::Rebus {
                displayed,
                full: full.to_string(),
            },
            circled: false,
        })
    }

    /// Set the circled-square markup flag
    #[inline]
    #[must_use = "returns the cell with the markup flag applied"]
    pub const fn with_circle(mut self, circled: bool) -> Self {
        self.circled = circled;
        self
    }

    /// Whether this cell is a block
    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self.kind, CellKind::Block)
    }

    /// Whether this cell holds a multi-character answer
    #[inline]
    #[must_use]
    pub const fn is_rebus(&self) -> bool {
        matches!(self.kind, CellKind::Rebus { .. })
    }

    /// Character this cell contributes to the flattened solution string
    ///
    /// Blocks encode as `.`; rebus cells contribute their displayed (first)
    /// character, with the full answer carried in the rebus table instead.
    #[must_use]
    pub fn solution_char(&self) -> char {
        match &self.kind {
            CellKind::Block => '.',
            CellKind::Letter(c) => *c,
            CellKind::Rebus { displayed, .. } => *displayed,
        }
    }

    /// Character this cell contributes to the flattened fill string
    ///
    /// Fillable cells are never pre-solved in the output, so anything that
    /// is not a block encodes as the `-` placeholder.
    #[must_use]
    pub const fn fill_char(&self) -> char {
        if self.is_block() {
            '.'
        } else {
            '-'
        }
    }
}
