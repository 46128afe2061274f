//! # crosspuz-backend
//!
//! Schema adapters for crosspuz-rs.
//!
//! The provider publishes puzzles in two incompatible JSON shapes. Each
//! shape gets one adapter implementing the [`SchemaAdapter`] trait, mapping
//! grid, clue, rebus, and markup data onto the canonical model from
//! `crosspuz-core`:
//!
//! ```text
//! raw JSON ──► SchemaAdapter::parse ──► ParsedPuzzle (cells, raw clues, metadata)
//!                                           │
//!                     clue ordering ◄───────┼───────► rebus / markup encoders
//!                                           ▼
//!                                   CanonicalPuzzle
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use crosspuz_backend::{adapter_for, PuzzleSchema};
//!
//! let raw: serde_json::Value = serde_json::from_str("...")?;
//! let puzzle = adapter_for(PuzzleSchema::Classic).convert(&raw)?;
//! println!("{} clues", puzzle.clues.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Classic (v2 daily) schema adapter
pub mod classic;
/// Adapter trait and shared output types
pub mod traits;
/// Variety (v6) schema adapter
pub mod variety;

pub use classic::ClassicAdapter;
pub use traits::{ParsedPuzzle, PuzzleSchema, SchemaAdapter};
pub use variety::VarietyAdapter;

/// Get the adapter for a schema
///
/// The adapters are stateless unit types, so a shared static instance
/// serves every conversion.
#[must_use = "returns the adapter to convert payloads with"]
pub fn adapter_for(schema: PuzzleSchema) -> &'static dyn SchemaAdapter {
    match schema {
        PuzzleSchema::Classic => &ClassicAdapter,
        PuzzleSchema::Variety => &VarietyAdapter,
    }
}
