//! Puzzle metadata and the generated-title fallback

use chrono::NaiveDate;

/// Metadata attached to a canonical puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleMetadata {
    /// Constructor byline, trimmed
    pub author: String,
    /// Copyright line, trimmed
    pub copyright: String,
    /// Canonical title; generated from the date when the provider gives none
    pub title: String,
    /// Whether `title` was auto-generated rather than supplied
    ///
    /// Remembered so the filename layer can suppress a redundant
    /// date-derived title segment.
    pub title_is_generated: bool,
    /// Optional notepad text
    pub notes: Option<String>,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Publication date
    pub date: NaiveDate,
}

impl PuzzleMetadata {
    /// Build metadata, resolving the title fallback
    ///
    /// A missing, empty, or whitespace-only title falls back to the
    /// publication date in long form (see [`generated_title`]) and sets
    /// `title_is_generated`.
    #[must_use = "creates metadata that should be attached to a puzzle"]
    pub fn new(
        author: &str,
        copyright: &str,
        title: Option<&str>,
        width: usize,
        height: usize,
        date: NaiveDate,
    ) -> Self {
        let explicit = title.map(str::trim).filter(|t| !t.is_empty());
        let (title, title_is_generated) = match explicit {
            Some(t) => (t.to_string(), false),
            None => (generated_title(date), true),
        };

        Self {
            author: author.trim().to_string(),
            copyright: copyright.trim().to_string(),
            title,
            title_is_generated,
            notes: None,
            width,
            height,
            date,
        }
    }

    /// Attach notepad text, trimmed; empty notes are dropped
    #[must_use = "returns the metadata with notes applied"]
    pub fn with_notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        self
    }

    /// Number of cells in the grid
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// The fallback title for a puzzle published on `date`
///
/// Long-form weekday/month/day/year, e.g. `Thursday, March 07, 2024`.
#[must_use = "returns the generated title string"]
pub fn generated_title(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}
