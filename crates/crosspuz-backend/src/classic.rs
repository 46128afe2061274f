//! Adapter for the provider's classic (v2 daily) JSON shape
//!
//! The classic payload carries a `puzzle_meta` block and a `puzzle_data`
//! block. Grid content arrives as a per-cell `answers` list with a parallel
//! numeric `layout` list; clues arrive as two separately-keyed lists. The
//! provider strips `puzzle_data` from responses to unauthenticated or
//! expired sessions, which this adapter reports as a recoverable
//! [`PuzzleError::DataUnavailable`], not a parse bug.

use crate::traits::{ParsedPuzzle, PuzzleSchema, SchemaAdapter};
use chrono::NaiveDate;
use crosspuz_core::{
    order_classic, Direction, GridCell, PuzzleError, PuzzleMetadata, RawClue, Result,
};
use serde::Deserialize;
use serde_json::Value;

/// Layout code marking a circled square
const LAYOUT_CIRCLED: i64 = 3;

/// Classic schema adapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassicAdapter;

/// Top-level classic payload
#[derive(Debug, Deserialize)]
struct ClassicPayload {
    puzzle_meta: ClassicMeta,
    #[serde(default)]
    puzzle_data: Option<ClassicData>,
}

#[derive(Debug, Deserialize)]
struct ClassicMeta {
    #[serde(default)]
    author: String,
    #[serde(default)]
    copyright: String,
    width: usize,
    height: usize,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    notes: Vec<ClassicNote>,
    #[serde(rename = "printDate")]
    print_date: String,
}

#[derive(Debug, Deserialize)]
struct ClassicNote {
    #[serde(default)]
    txt: String,
}

#[derive(Debug, Deserialize)]
struct ClassicData {
    answers: Vec<Option<ClassicAnswer>>,
    #[serde(default)]
    layout: Vec<i64>,
    clues: ClassicClues,
}

/// A cell's answer entry, observed in two encodings
///
/// Plain squares arrive as a bare string; rebus squares arrive as a list
/// whose first element is the full multi-character answer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassicAnswer {
    Text(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct ClassicClues {
    #[serde(rename = "A", default)]
    across: Vec<ClassicClue>,
    #[serde(rename = "D", default)]
    down: Vec<ClassicClue>,
}

#[derive(Debug, Deserialize)]
struct ClassicClue {
    #[serde(rename = "clueNum")]
    number: u32,
    value: String,
}

impl ClassicAdapter {
    /// Create a classic adapter instance
    #[inline]
    #[must_use = "creates an adapter that should be used for parsing"]
    pub const fn new() -> Self {
        Self
    }

    /// Normalize one answer entry into a grid cell
    fn cell_from_answer(answer: Option<&ClassicAnswer>, circled: bool) -> Result<GridCell> {
        let effective = match answer {
            None => None,
            Some(ClassicAnswer::Text(s)) => (!s.is_empty()).then_some(s.as_str()),
            Some(ClassicAnswer::Many(list)) => {
                list.first().map(String::as_str).filter(|s| !s.is_empty())
            }
        };

        let cell = match effective {
            None => GridCell::block(),
            Some(s) => {
                let mut chars = s.chars();
                // first char always exists here; emptiness was filtered above
                let first = chars.next().unwrap_or('.');
                if chars.next().is_none() {
                    GridCell::letter(first)
                } else {
                    GridCell::rebus(s)?
                }
            }
        };
        Ok(cell.with_circle(circled))
    }
}

impl SchemaAdapter for ClassicAdapter {
    fn schema(&self) -> PuzzleSchema {
        PuzzleSchema::Classic
    }

    fn parse(&self, data: &Value) -> Result<ParsedPuzzle> {
        let payload = ClassicPayload::deserialize(data)?;
        let meta = payload.puzzle_meta;

        let Some(puzzle_data) = payload.puzzle_data else {
            return Err(PuzzleError::DataUnavailable(
                "puzzle data not present in response; the session may have expired, \
                 re-authenticate and retry"
                    .to_string(),
            ));
        };

        let date = NaiveDate::parse_from_str(&meta.print_date, "%Y-%m-%d").map_err(|e| {
            PuzzleError::DataUnavailable(format!(
                "unparseable print date '{}': {e}",
                meta.print_date
            ))
        })?;

        let cells: Vec<GridCell> = puzzle_data
            .answers
            .iter()
            .enumerate()
            .map(|(idx, answer)| {
                let circled = puzzle_data.layout.get(idx).copied() == Some(LAYOUT_CIRCLED);
                Self::cell_from_answer(answer.as_ref(), circled)
            })
            .collect::<Result<_>>()?;

        // Across first, then down: the classic ordering rule's stable sort
        // relies on this concatenation order for shared numbers.
        let clues: Vec<RawClue> = puzzle_data
            .clues
            .across
            .into_iter()
            .map(|c| RawClue::new(Direction::Across, c.number, c.value))
            .chain(
                puzzle_data
                    .clues
                    .down
                    .into_iter()
                    .map(|c| RawClue::new(Direction::Down, c.number, c.value)),
            )
            .collect();

        log::debug!(
            "classic payload: {}x{} grid, {} cells, {} clues",
            meta.width,
            meta.height,
            cells.len(),
            clues.len()
        );

        let first_note = meta.notes.first().map(|n| n.txt.as_str());
        let metadata = PuzzleMetadata::new(
            &meta.author,
            &meta.copyright,
            meta.title.as_deref(),
            meta.width,
            meta.height,
            date,
        )
        .with_notes(first_note);

        Ok(ParsedPuzzle {
            metadata,
            cells,
            clues,
        })
    }

    fn order_clues(&self, clues: Vec<RawClue>) -> Vec<String> {
        order_classic(clues)
    }
}
