//! Output filename selection
//!
//! Builds a date-stamped filename for a converted puzzle. When the puzzle's
//! title was auto-generated from its publication date, the title segment is
//! suppressed; repeating the date in prose form would only clutter the
//! name.

use crosspuz_core::CanonicalPuzzle;

/// Pick the output filename for a puzzle
///
/// Format: `<prefix> - <YYYYMMDD>[ - <title>].puz`. The title segment is
/// included only when the provider supplied a real title, and is sanitized
/// for the filesystem.
#[must_use = "returns the filename the puzzle should be written to"]
pub fn pick_filename(puzzle: &CanonicalPuzzle, prefix: &str) -> String {
    let date = puzzle.metadata.date.format("%Y%m%d");
    let mut name = format!("{prefix} - {date}");

    if !puzzle.metadata.title_is_generated {
        let title = sanitize(&puzzle.metadata.title);
        if !title.is_empty() {
            name.push_str(" - ");
            name.push_str(&title);
        }
    }

    name.push_str(".puz");
    name
}

/// Strip filesystem-hostile characters and collapse whitespace
fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => ' ',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
