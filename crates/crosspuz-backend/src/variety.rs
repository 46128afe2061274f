//! Adapter for the provider's variety (v6) JSON shape
//!
//! The variety payload nests its grid in a single-element `body` list with
//! explicit dimensions and a flat clue list. As observed, this schema
//! carries no rebus or circled-square data; that is a documented limitation
//! of the shape, so this adapter only ever emits plain letter and block
//! cells, and a would-be multi-character answer is reported rather than
//! silently truncated.

use crate::traits::{ParsedPuzzle, PuzzleSchema, SchemaAdapter};
use chrono::NaiveDate;
use crosspuz_core::{
    order_variety, Direction, GridCell, PuzzleError, PuzzleMetadata, RawClue, Result,
};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Variety schema adapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VarietyAdapter;

/// Top-level variety payload
#[derive(Debug, Deserialize)]
struct VarietyPayload {
    #[serde(default)]
    constructors: Vec<String>,
    #[serde(default)]
    copyright: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "publicationDate")]
    publication_date: String,
    body: Vec<VarietyBody>,
}

#[derive(Debug, Deserialize)]
struct VarietyBody {
    dimensions: VarietyDimensions,
    cells: Vec<Option<VarietyCell>>,
    #[serde(default)]
    clues: Vec<VarietyClue>,
}

#[derive(Debug, Deserialize)]
struct VarietyDimensions {
    width: Dimension,
    height: Dimension,
}

/// Grid dimension, observed both as a number and as a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Dimension {
    Number(usize),
    Text(String),
}

impl Dimension {
    fn value(&self, name: &str) -> Result<usize> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse().map_err(|_| {
                PuzzleError::DataUnavailable(format!("non-numeric grid {name} '{s}'"))
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VarietyCell {
    #[serde(default)]
    answer: String,
}

#[derive(Debug, Deserialize)]
struct VarietyClue {
    label: String,
    direction: String,
    #[serde(default)]
    text: Vec<VarietyClueText>,
}

#[derive(Debug, Deserialize)]
struct VarietyClueText {
    #[serde(default)]
    plain: String,
}

impl VarietyAdapter {
    /// Create a variety adapter instance
    #[inline]
    #[must_use = "creates an adapter that should be used for parsing"]
    pub const fn new() -> Self {
        Self
    }

    /// Normalize one cell entry; never produces a rebus or a circle
    fn cell_from_entry(index: usize, entry: Option<&VarietyCell>) -> Result<GridCell> {
        let Some(cell) = entry else {
            return Ok(GridCell::block());
        };
        let mut chars = cell.answer.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(GridCell::block()),
            (Some(c), None) => Ok(GridCell::letter(c)),
            (Some(_), Some(_)) => Err(PuzzleError::DataUnavailable(format!(
                "cell {index} carries multi-character answer '{}'; the variety schema \
                 has no rebus support",
                cell.answer
            ))),
        }
    }

    /// Decode one clue record into a raw clue
    fn clue_from_entry(entry: VarietyClue) -> Result<RawClue> {
        let number: u32 = entry.label.trim().parse().map_err(|_| {
            PuzzleError::DataUnavailable(format!("non-numeric clue label '{}'", entry.label))
        })?;
        let direction = Direction::from_str(&entry.direction)
            .map_err(PuzzleError::DataUnavailable)?;
        let text = entry
            .text
            .into_iter()
            .next()
            .map(|t| t.plain)
            .ok_or_else(|| {
                PuzzleError::DataUnavailable(format!("clue {number}-{direction} has no text"))
            })?;
        Ok(RawClue::new(direction, number, text))
    }
}

impl SchemaAdapter for VarietyAdapter {
    fn schema(&self) -> PuzzleSchema {
        PuzzleSchema::Variety
    }

    fn parse(&self, data: &Value) -> Result<ParsedPuzzle> {
        let payload = VarietyPayload::deserialize(data)?;

        let body = payload.body.into_iter().next().ok_or_else(|| {
            PuzzleError::DataUnavailable("variety payload has no grid body".to_string())
        })?;

        let author = payload.constructors.first().ok_or_else(|| {
            PuzzleError::DataUnavailable("variety payload lists no constructors".to_string())
        })?;

        let date =
            NaiveDate::parse_from_str(&payload.publication_date, "%Y-%m-%d").map_err(|e| {
                PuzzleError::DataUnavailable(format!(
                    "unparseable publication date '{}': {e}",
                    payload.publication_date
                ))
            })?;

        let width = body.dimensions.width.value("width")?;
        let height = body.dimensions.height.value("height")?;

        let cells: Vec<GridCell> = body
            .cells
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::cell_from_entry(index, entry.as_ref()))
            .collect::<Result<_>>()?;

        let clues: Vec<RawClue> = body
            .clues
            .into_iter()
            .map(Self::clue_from_entry)
            .collect::<Result<_>>()?;

        log::debug!(
            "variety payload: {width}x{height} grid, {} cells, {} clues",
            cells.len(),
            clues.len()
        );

        let metadata = PuzzleMetadata::new(
            author,
            &payload.copyright,
            payload.title.as_deref(),
            width,
            height,
            date,
        );

        Ok(ParsedPuzzle {
            metadata,
            cells,
            clues,
        })
    }

    fn order_clues(&self, clues: Vec<RawClue>) -> Vec<String> {
        order_variety(clues)
    }
}
