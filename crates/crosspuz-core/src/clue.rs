//! Raw clue records and the provider-specific ordering rules
//!
//! Both providers hand clues over unsorted relative to the final numbered
//! sequence the interchange format expects, but their tie-break semantics
//! differ, so the two rules live here as separate pure functions rather
//! than one configurable sort.

use serde::{Deserialize, Serialize};

/// Clue direction
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Direction {
    /// Left-to-right entry
    #[default]
    Across,
    /// Top-to-bottom entry
    Down,
}

impl std::fmt::Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Across => write!(f, "Across"),
            Self::Down => write!(f, "Down"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "across" | "a" => Ok(Self::Across),
            "down" | "d" => Ok(Self::Down),
            _ => Err(format!("unknown clue direction '{s}' (expected: Across, Down)")),
        }
    }
}

/// One clue as emitted by a schema adapter, before ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawClue {
    /// Direction of the entry this clue belongs to
    pub direction: Direction,
    /// Clue number under canonical grid numbering
    pub number: u32,
    /// Clue text as delivered by the provider
    pub text: String,
}

impl RawClue {
    /// Create a raw clue record
    #[inline]
    #[must_use = "creates a clue record that should be ordered and attached to a puzzle"]
    pub const fn new(direction: Direction, number: u32, text: String) -> Self {
        Self {
            direction,
            number,
            text,
        }
    }
}

/// Order clues per the classic schema's rule
///
/// Stable sort by clue number only. The input list must arrive as the
/// across clues followed by the down clues; for numbers appearing in both
/// directions, the stable sort preserves that order, which matches the
/// convention of listing a number's across clue before its down clue.
#[must_use = "returns the final ordered clue texts"]
pub fn order_classic(mut clues: Vec<RawClue>) -> Vec<String> {
    clues.sort_by_key(|c| c.number);
    clues.into_iter().map(|c| clean_clue_text(&c.text)).collect()
}

/// Order clues per the variety schema's rule
///
/// Explicit two-key sort on (number, direction), independent of input
/// order, because this schema's clue list is not grouped by direction.
/// `Across` sorts before `Down`, matching the direction names' lexical
/// order.
#[must_use = "returns the final ordered clue texts"]
pub fn order_variety(mut clues: Vec<RawClue>) -> Vec<String> {
    clues.sort_by_key(|c| (c.number, c.direction));
    clues.into_iter().map(|c| clean_clue_text(&c.text)).collect()
}

/// Normalize a clue text to plain readable form
///
/// Resolves the escaping artifacts the provider actually emits (HTML
/// entities, typographic quotes and dashes) and trims surrounding
/// whitespace. Other Unicode passes through untouched.
#[must_use = "returns the cleaned clue text"]
pub fn clean_clue_text(raw: &str) -> String {
    let mut text = raw
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    if text.chars().any(|c| !c.is_ascii()) {
        text = text
            .chars()
            .flat_map(|c| match c {
                '\u{2018}' | '\u{2019}' => vec!['\''],
                '\u{201C}' | '\u{201D}' => vec!['"'],
                '\u{2013}' => vec!['-'],
                '\u{2014}' => vec!['-', '-'],
                '\u{2026}' => vec!['.', '.', '.'],
                '\u{00A0}' => vec![' '],
                other => vec![other],
            })
            .collect();
    }

    text.trim().to_string()
}
