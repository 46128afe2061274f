//! Core trait definition for schema adapters

use crosspuz_core::{CanonicalPuzzle, GridCell, PuzzleMetadata, RawClue, Result};
use serde_json::Value;

/// The two provider JSON shapes
///
/// A closed set: the provider publishes puzzles in exactly these two
/// independently-evolved schemas, and nothing here is designed for a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleSchema {
    /// The v2 daily-puzzle shape (rebus and circled-square aware)
    Classic,
    /// The v6 variety shape (plain letters only)
    Variety,
}

impl std::fmt::Display for PuzzleSchema {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Variety => write!(f, "variety"),
        }
    }
}

/// Adapter output before clue ordering and assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPuzzle {
    /// Trimmed metadata with the title fallback already resolved
    pub metadata: PuzzleMetadata,
    /// Row-major cell sequence, `width * height` entries
    pub cells: Vec<GridCell>,
    /// Raw clues in the schema's native order
    pub clues: Vec<RawClue>,
}

/// One provider schema mapped onto the canonical model
///
/// Implementations hold no state; each call works from a freshly decoded
/// JSON payload and produces an independent [`ParsedPuzzle`], so concurrent
/// conversions never share anything mutable.
pub trait SchemaAdapter: Send + Sync {
    /// Get the schema this adapter handles
    fn schema(&self) -> PuzzleSchema;

    /// Map a decoded provider payload onto cells, raw clues, and metadata
    ///
    /// # Errors
    /// Returns `PuzzleError::DataUnavailable` when the payload is missing
    /// its puzzle data (stripped responses for expired sessions) or carries
    /// semantically unusable values, and `PuzzleError::Json` when the
    /// payload does not decode against the schema at all.
    fn parse(&self, data: &Value) -> Result<ParsedPuzzle>;

    /// Apply this schema's clue ordering rule
    fn order_clues(&self, clues: Vec<RawClue>) -> Vec<String>;

    /// Full conversion: parse, order clues, assemble
    ///
    /// # Errors
    /// Propagates parse errors; assembly failures surface as
    /// `PuzzleError::Invariant` and indicate an adapter defect.
    fn convert(&self, data: &Value) -> Result<CanonicalPuzzle> {
        let parsed = self.parse(data)?;
        let clues = self.order_clues(parsed.clues);
        CanonicalPuzzle::assemble(parsed.metadata, &parsed.cells, clues)
    }
}
