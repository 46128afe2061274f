//! End-to-end conversion tests: provider JSON through adapter, ordering,
//! encoders, and assembly into a canonical puzzle.

use crosspuz_backend::{adapter_for, ClassicAdapter, PuzzleSchema, SchemaAdapter, VarietyAdapter};
use crosspuz_core::{PuzzleError, CIRCLED};
use serde_json::{json, Value};

/// Classic payload for this 3x3 grid:
/// ```text
/// C A T
/// O . E
/// W E B
/// ```
/// Entries: 1-Across, 1-Down, 2-Down, 3-Across.
fn classic_payload() -> Value {
    json!({
        "puzzle_meta": {
            "author": "  Jane Doe ",
            "copyright": " 2024, The New York Times ",
            "width": 3,
            "height": 3,
            "printDate": "2024-03-07",
            "notes": [{ "txt": " Look closely. " }]
        },
        "puzzle_data": {
            "answers": ["C", "A", "T", "O", "", "E", "W", "E", "B"],
            "layout": [1, 1, 1, 1, 0, 1, 1, 1, 1],
            "clues": {
                "A": [
                    { "clueNum": 1, "value": "Feline" },
                    { "clueNum": 3, "value": "Spider&#39;s home" }
                ],
                "D": [
                    { "clueNum": 1, "value": "Bovine" },
                    { "clueNum": 2, "value": " Column filler " }
                ]
            }
        }
    })
}

fn variety_payload() -> Value {
    json!({
        "constructors": [" John Q. Public "],
        "copyright": "2024, The New York Times",
        "title": "ACROSTIC",
        "publicationDate": "2024-03-07",
        "body": [{
            "dimensions": { "width": "3", "height": 3 },
            "cells": [
                { "answer": "C" }, { "answer": "A" }, { "answer": "T" },
                { "answer": "O" }, null,              { "answer": "E" },
                { "answer": "W" }, { "answer": "E" }, { "answer": "B" }
            ],
            "clues": [
                { "label": "3", "direction": "Across", "text": [{ "plain": "Spider's home" }] },
                { "label": "1", "direction": "Down",   "text": [{ "plain": "Bovine" }] },
                { "label": "1", "direction": "Across", "text": [{ "plain": "Feline" }] },
                { "label": "2", "direction": "Down",   "text": [{ "plain": "Column filler" }] }
            ]
        }]
    })
}

// ==================== CLASSIC CONVERSION ====================

#[test]
fn test_classic_full_conversion() {
    let puzzle = ClassicAdapter::new()
        .convert(&classic_payload())
        .expect("well-formed classic payload must convert");

    assert_eq!(puzzle.width(), 3);
    assert_eq!(puzzle.height(), 3);
    assert_eq!(puzzle.solution, "CATO.EWEB");
    assert_eq!(puzzle.fill, "----.----");
    assert_eq!(puzzle.solution.len(), 9, "solution covers width*height cells");
    assert_eq!(puzzle.fill.len(), puzzle.solution.len());

    assert_eq!(
        puzzle.clues,
        vec!["Feline", "Bovine", "Column filler", "Spider's home"],
        "stable number sort with across before down, texts cleaned and trimmed"
    );

    assert_eq!(puzzle.metadata.author, "Jane Doe");
    assert_eq!(puzzle.metadata.copyright, "2024, The New York Times");
    assert_eq!(puzzle.metadata.notes.as_deref(), Some("Look closely."));
    assert_eq!(puzzle.metadata.title, "Thursday, March 07, 2024");
    assert!(puzzle.metadata.title_is_generated);
}

#[test]
fn test_classic_block_positions_agree() {
    let puzzle = ClassicAdapter::new().convert(&classic_payload()).unwrap();
    for (idx, (s, f)) in puzzle.solution.chars().zip(puzzle.fill.chars()).enumerate() {
        assert_eq!(
            s == '.',
            f == '.',
            "solution and fill disagree about a block at cell {idx}"
        );
    }
}

#[test]
fn test_classic_without_markup_or_rebus_omits_both_extensions() {
    let puzzle = ClassicAdapter::new().convert(&classic_payload()).unwrap();
    assert!(puzzle.markup.is_none());
    assert!(puzzle.rebus.is_none());
    assert!(puzzle.extension_sections().is_empty());
}

#[test]
fn test_classic_circled_squares_produce_bitmap() {
    let mut payload = classic_payload();
    payload["puzzle_data"]["layout"] = json!([3, 1, 1, 1, 0, 1, 1, 1, 3]);

    let puzzle = ClassicAdapter::new().convert(&payload).unwrap();
    let bitmap = puzzle.markup.expect("circled squares must produce the bitmap");
    assert_eq!(bitmap.len(), 9, "bitmap has one byte per cell");
    assert_eq!(bitmap[0], CIRCLED);
    assert_eq!(bitmap[8], CIRCLED);
    assert!(
        bitmap[1..8].iter().all(|&b| b == 0),
        "uncircled cells stay zero"
    );
}

#[test]
fn test_classic_rebus_cells_produce_board_and_table() {
    let mut payload = classic_payload();
    // Rebus answers in two cells; displayed letters keep the solution intact
    payload["puzzle_data"]["answers"] =
        json!([["CAR"], "A", "T", "O", "", "E", ["WEB"], "E", "B"]);

    let puzzle = ClassicAdapter::new().convert(&payload).unwrap();
    assert_eq!(puzzle.solution, "CATO.EWEB", "rebus displays its first letter");

    let rebus = puzzle.rebus.expect("rebus cells must produce the extension");
    assert_eq!(rebus.board.len(), 9);
    assert_eq!(rebus.board[0], 1, "first rebus met gets board value index 0 + 1");
    assert_eq!(rebus.board[6], 2);
    assert_eq!(rebus.table.get(0), Some("CAR"));
    assert_eq!(rebus.table.get(1), Some("WEB"));
    assert_eq!(rebus.table.len(), 2, "indices are dense and gapless");
}

#[test]
fn test_classic_missing_puzzle_data_is_data_unavailable() {
    let payload = json!({
        "puzzle_meta": {
            "author": "Jane Doe",
            "copyright": "2024",
            "width": 3,
            "height": 3,
            "printDate": "2024-03-07"
        }
    });
    let err = ClassicAdapter::new().convert(&payload).unwrap_err();
    assert!(
        matches!(err, PuzzleError::DataUnavailable(_)),
        "stripped payload must map to DataUnavailable, got {err:?}"
    );
}

// ==================== VARIETY CONVERSION ====================

#[test]
fn test_variety_full_conversion() {
    let puzzle = VarietyAdapter::new()
        .convert(&variety_payload())
        .expect("well-formed variety payload must convert");

    assert_eq!(puzzle.solution, "CATO.EWEB");
    assert_eq!(puzzle.fill, "----.----");
    assert_eq!(
        puzzle.clues,
        vec!["Feline", "Bovine", "Column filler", "Spider's home"],
        "two-key sort on (number, direction) regardless of input order"
    );
    assert_eq!(puzzle.metadata.author, "John Q. Public");
    assert_eq!(puzzle.metadata.title, "ACROSTIC");
    assert!(!puzzle.metadata.title_is_generated);
}

#[test]
fn test_variety_never_produces_extensions() {
    let puzzle = VarietyAdapter::new().convert(&variety_payload()).unwrap();
    assert!(puzzle.markup.is_none(), "variety schema has no circle concept");
    assert!(puzzle.rebus.is_none(), "variety schema has no rebus concept");
}

// ==================== CROSS-SCHEMA ====================

#[test]
fn test_both_schemas_agree_on_the_same_grid() {
    let classic = adapter_for(PuzzleSchema::Classic)
        .convert(&classic_payload())
        .unwrap();
    let variety = adapter_for(PuzzleSchema::Variety)
        .convert(&variety_payload())
        .unwrap();

    assert_eq!(classic.solution, variety.solution);
    assert_eq!(classic.fill, variety.fill);
    assert_eq!(classic.clues, variety.clues);
}

#[test]
fn test_clue_count_must_match_grid_numbering() {
    let mut payload = classic_payload();
    // Drop one clue: the grid still implies four numbered entry points
    payload["puzzle_data"]["clues"]["D"] = json!([{ "clueNum": 1, "value": "Bovine" }]);

    let err = ClassicAdapter::new().convert(&payload).unwrap_err();
    assert!(
        matches!(err, PuzzleError::Invariant(_)),
        "clue/grid mismatch is an assembly defect, got {err:?}"
    );
}
