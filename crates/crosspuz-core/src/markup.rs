//! Circled-square markup bitmap
//!
//! Cell markup travels in its own one-byte-per-cell section. When no cell
//! is flagged, the section is omitted entirely rather than written as all
//! zeroes; consuming tools special-case the absence of the section, and an
//! all-zero block would only waste space.

use crate::cell::GridCell;

/// Bitmap value marking a circled square
pub const CIRCLED: u8 = 0x80;

/// Build the circled-square bitmap for a cell sequence
///
/// One byte per cell: [`CIRCLED`] where the cell is flagged, `0` otherwise.
/// Returns `None` when nothing is circled.
#[must_use = "returns the bitmap to attach to the puzzle"]
pub fn encode_markup(cells: &[GridCell]) -> Option<Vec<u8>> {
    if !cells.iter().any(|c| c.circled) {
        return None;
    }
    Some(
        cells
            .iter()
            .map(|c| if c.circled { CIRCLED } else { 0 })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_circles_means_no_bitmap() {
        let cells = vec![GridCell::letter('A'), GridCell::block()];
        assert!(
            encode_markup(&cells).is_none(),
            "unflagged grid must omit the bitmap entirely"
        );
    }

    #[test]
    fn test_bitmap_covers_every_cell() {
        let cells = vec![
            GridCell::letter('A').with_circle(true),
            GridCell::letter('B'),
            GridCell::block(),
            GridCell::letter('C').with_circle(true),
        ];
        let bitmap = encode_markup(&cells).expect("flagged grid must produce a bitmap");
        assert_eq!(bitmap, vec![CIRCLED, 0, 0, CIRCLED]);
        assert_eq!(bitmap.len(), cells.len(), "one byte per cell, blocks included");
    }

    #[test]
    fn test_single_circle_is_enough() {
        let cells = vec![GridCell::letter('Z').with_circle(true)];
        assert_eq!(encode_markup(&cells), Some(vec![CIRCLED]));
    }
}
