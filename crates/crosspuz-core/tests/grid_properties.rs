//! Grid-level properties of assembly and the extension encoders across a
//! range of grid sizes.

use chrono::NaiveDate;
use crosspuz_core::{
    encode_markup, encode_rebus, CanonicalPuzzle, GridCell, PuzzleError, PuzzleMetadata, CIRCLED,
};

fn metadata(width: usize, height: usize) -> PuzzleMetadata {
    PuzzleMetadata::new(
        "Property Tester",
        "2024",
        Some("Grid"),
        width,
        height,
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
    )
}

/// Open grid of letters, no blocks
fn open_grid(width: usize, height: usize) -> Vec<GridCell> {
    (0..width * height)
        .map(|i| GridCell::letter(char::from(b'A' + (i % 26) as u8)))
        .collect()
}

/// Clue list sized to the open grid: one across per row, one down per column
fn open_grid_clues(width: usize, height: usize) -> Vec<String> {
    (0..width + height).map(|i| format!("clue {i}")).collect()
}

#[test]
fn test_extensions_absent_for_plain_grids_of_any_size() {
    for (width, height) in [(2, 2), (5, 5), (15, 15), (21, 21), (7, 3)] {
        let cells = open_grid(width, height);
        let puzzle = CanonicalPuzzle::assemble(
            metadata(width, height),
            &cells,
            open_grid_clues(width, height),
        )
        .expect("open grid must assemble");

        assert!(
            puzzle.markup.is_none() && puzzle.rebus.is_none(),
            "{width}x{height}: grid without circles or rebuses must omit both extensions"
        );
        assert_eq!(puzzle.solution.len(), width * height);
        assert_eq!(puzzle.fill.len(), width * height);
    }
}

#[test]
fn test_rebus_indices_stay_gapless_in_large_grids() {
    let mut cells = open_grid(15, 15);
    let rebus_positions = [3, 17, 17 + 31, 200, 224];
    for (n, &pos) in rebus_positions.iter().enumerate() {
        cells[pos] = GridCell::rebus(&format!("WORD{n}")).unwrap();
    }

    let ext = encode_rebus(&cells)
        .expect("grid must encode")
        .expect("rebus cells present");

    assert_eq!(ext.table.len(), rebus_positions.len());
    for (n, &pos) in rebus_positions.iter().enumerate() {
        assert_eq!(
            ext.board[pos] as usize,
            n + 1,
            "cell {pos} must carry index {n} + 1"
        );
        assert_eq!(ext.table.get(n), Some(format!("WORD{n}").as_str()));
    }
    let marked = ext.board.iter().filter(|&&b| b != 0).count();
    assert_eq!(marked, rebus_positions.len(), "no stray board entries");
}

#[test]
fn test_rebus_count_at_the_board_byte_limit_still_encodes() {
    // 255 rebus cells fill the one-byte board exactly: last value is 254 + 1
    let mut cells: Vec<GridCell> = (0..255)
        .map(|i| GridCell::rebus(&format!("R{i}X")).unwrap())
        .collect();
    cells.push(GridCell::letter('Z'));

    let ext = encode_rebus(&cells)
        .expect("255 rebus cells fit the board")
        .expect("rebus cells present");
    assert_eq!(ext.table.len(), 255);
    assert_eq!(ext.board[254], 255, "highest board value is index 254 + 1");
    assert_eq!(ext.board[255], 0, "plain letter stays unmarked");
}

#[test]
fn test_rebus_count_beyond_the_board_byte_limit_is_an_invariant_error() {
    // A 256th rebus cell would need board value 256, which a byte cannot hold
    let cells: Vec<GridCell> = (0..256)
        .map(|i| GridCell::rebus(&format!("R{i}X")).unwrap())
        .collect();

    let err = encode_rebus(&cells).unwrap_err();
    assert!(
        matches!(err, PuzzleError::Invariant(_)),
        "overflowing the board must fail loudly rather than truncate, got {err:?}"
    );
}

#[test]
fn test_markup_bytes_only_at_circled_positions() {
    let mut cells = open_grid(15, 15);
    let circled_positions = [0, 16, 32, 48, 64];
    for &pos in &circled_positions {
        cells[pos] = cells[pos].clone().with_circle(true);
    }

    let bitmap = encode_markup(&cells).expect("circles present");
    assert_eq!(bitmap.len(), 225);
    for (pos, &byte) in bitmap.iter().enumerate() {
        let expected = if circled_positions.contains(&pos) {
            CIRCLED
        } else {
            0
        };
        assert_eq!(byte, expected, "unexpected bitmap byte at cell {pos}");
    }
}

#[test]
fn test_assembled_puzzle_is_internally_consistent() {
    let mut cells = open_grid(5, 5);
    cells[12] = GridCell::rebus("MIDDLE").unwrap().with_circle(true);
    let puzzle = CanonicalPuzzle::assemble(metadata(5, 5), &cells, open_grid_clues(5, 5))
        .expect("grid must assemble");

    assert_eq!(puzzle.solution.len(), 25);
    assert_eq!(puzzle.solution.chars().nth(12), Some('M'));
    assert_eq!(puzzle.fill, "-".repeat(25));

    let rebus = puzzle.rebus.as_ref().expect("rebus attached");
    assert_eq!(rebus.board.len(), 25);
    assert_eq!(rebus.table.to_rtbl_string(), " 0:MIDDLE;");

    let markup = puzzle.markup.as_ref().expect("markup attached");
    assert_eq!(markup.len(), 25);
    assert_eq!(markup[12], CIRCLED);
}
