//! # crosspuz-core
//!
//! Canonical crossword model and extension construction for crosspuz-rs.
//!
//! This crate normalizes provider-specific puzzle data into a single
//! in-memory representation suitable for the de facto binary crossword
//! interchange format:
//!
//! - [`GridCell`] / [`CellKind`]: one grid position (block, letter, or
//!   rebus) plus the circled-square markup flag
//! - [`RawClue`] and the two ordering rules ([`order_classic`],
//!   [`order_variety`])
//! - [`encode_rebus`] / [`encode_markup`]: the optional extension sections
//! - [`CanonicalPuzzle`]: the frozen aggregate handed to an external
//!   [`PuzzleSink`] serializer
//!
//! The core is purely computational: no I/O, no shared state, one puzzle
//! per conversion.
//!
//! ## Example
//!
//! ```
//! use crosspuz_core::{CanonicalPuzzle, GridCell, PuzzleMetadata};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let metadata = PuzzleMetadata::new("Ada", "2024", None, 2, 1, date);
//! let cells = vec![GridCell::letter('H'), GridCell::letter('I')];
//! let puzzle = CanonicalPuzzle::assemble(metadata, &cells, vec!["Greeting".into()])?;
//! assert_eq!(puzzle.solution, "HI");
//! # Ok::<(), crosspuz_core::PuzzleError>(())
//! ```

/// Canonical grid cell model
pub mod cell;
/// Raw clues and ordering rules
pub mod clue;
/// Error taxonomy
pub mod error;
/// Circled-square bitmap construction
pub mod markup;
/// Puzzle metadata and title fallback
pub mod metadata;
/// Canonical puzzle assembly and serializer boundary
pub mod puzzle;
/// Rebus board and table construction
pub mod rebus;

pub use cell::{CellKind, GridCell};
pub use clue::{clean_clue_text, order_classic, order_variety, Direction, RawClue};
pub use error::{PuzzleError, Result};
pub use markup::{encode_markup, CIRCLED};
pub use metadata::{generated_title, PuzzleMetadata};
pub use puzzle::{
    numbered_entry_points, CanonicalPuzzle, ExtensionSection, PuzzleSink, SECTION_MARKUP,
    SECTION_REBUS_BOARD, SECTION_REBUS_TABLE,
};
pub use rebus::{encode_rebus, RebusExtension, RebusTable};
