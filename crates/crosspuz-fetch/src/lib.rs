//! # crosspuz-fetch
//!
//! Provider collaborators for crosspuz-rs: authentication, puzzle fetch,
//! and output filename selection.
//!
//! The conversion core (`crosspuz-core`, `crosspuz-backend`) is purely
//! computational; everything that talks to the network lives here. A
//! session token is required before any classic fetch is attempted, and no
//! call in this crate retries on its own; failures propagate to the caller
//! with a remediation hint where one exists.
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use crosspuz_backend::PuzzleSchema;
//! use crosspuz_fetch::{pick_filename, puzzle_for_date, NytClient};
//!
//! let client = NytClient::from_credentials("user@example.com", "hunter2")?;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let puzzle = puzzle_for_date(&client, PuzzleSchema::Classic, date)?;
//! println!("writing {}", pick_filename(&puzzle, "NY Times"));
//! # Ok::<(), crosspuz_core::PuzzleError>(())
//! ```

/// Credential exchange for the provider session token
pub mod auth;
/// Authenticated puzzle fetch client
pub mod client;
/// Output filename selection
pub mod filename;

pub use auth::{authenticate, SESSION_COOKIE};
pub use client::NytClient;
pub use filename::pick_filename;

use chrono::NaiveDate;
use crosspuz_backend::{adapter_for, PuzzleSchema};
use crosspuz_core::{CanonicalPuzzle, Result};

/// Fetch and convert the puzzle published on `date`
///
/// # Errors
/// Propagates fetch failures (`PuzzleNotFound` for dates with no puzzle,
/// `DataUnavailable` for stripped payloads) and conversion failures.
pub fn puzzle_for_date(
    client: &NytClient,
    schema: PuzzleSchema,
    date: NaiveDate,
) -> Result<CanonicalPuzzle> {
    let raw = match schema {
        PuzzleSchema::Classic => client.classic_by_date(date)?,
        PuzzleSchema::Variety => client.variety_by_date(date)?,
    };
    adapter_for(schema).convert(&raw)
}

/// Fetch and convert the latest published puzzle
///
/// # Errors
/// Fails with `PuzzleNotFound` for the variety schema, which has no
/// latest-puzzle lookup; otherwise propagates fetch and conversion
/// failures.
pub fn latest_puzzle(client: &NytClient, schema: PuzzleSchema) -> Result<CanonicalPuzzle> {
    let raw = match schema {
        PuzzleSchema::Classic => client.latest_classic()?,
        PuzzleSchema::Variety => client.latest_variety()?,
    };
    adapter_for(schema).convert(&raw)
}
