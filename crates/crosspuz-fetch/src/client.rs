//! Authenticated puzzle fetch client
//!
//! Supplies the raw JSON payloads the schema adapters consume. The classic
//! schema requires the session cookie before any fetch is attempted; the
//! variety schema is addressed directly by date, and an HTTP failure there
//! means no puzzle exists for that date.

use chrono::NaiveDate;
use crosspuz_core::{PuzzleError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::auth::SESSION_COOKIE;

const ORACLE_URL: &str = "https://www.nytimes.com/svc/crosswords/v2/oracle/daily.json";
const CLASSIC_PUZZLE_URL: &str = "https://www.nytimes.com/svc/crosswords/v2/puzzle";
const CLASSIC_LOOKUP_URL: &str = "https://www.nytimes.com/svc/crosswords/v3/puzzles.json";
const VARIETY_PUZZLE_URL: &str = "https://www.nytimes.com/svc/crosswords/v6/puzzle/variety";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Oracle response naming the currently published puzzle
#[derive(Debug, Deserialize)]
struct OracleResponse {
    results: OracleResults,
}

#[derive(Debug, Deserialize)]
struct OracleResults {
    current: OracleCurrent,
}

#[derive(Debug, Deserialize)]
struct OracleCurrent {
    puzzle_id: u64,
}

/// Published-puzzle listing used for by-date lookup
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    results: Vec<LookupEntry>,
}

#[derive(Debug, Deserialize)]
struct LookupEntry {
    puzzle_id: u64,
}

/// Classic puzzle envelope: the payload proper is `results[0]`
#[derive(Debug, Deserialize)]
struct ClassicEnvelope {
    #[serde(default)]
    results: Vec<Value>,
}

/// Blocking fetch client holding the provider session
#[derive(Debug, Clone)]
pub struct NytClient {
    session: String,
    http: reqwest::blocking::Client,
}

impl NytClient {
    /// Create a client from a stored session token
    ///
    /// # Errors
    /// Returns `PuzzleError::Authentication` when no token is available;
    /// the classic endpoints return stripped payloads without one, so this
    /// is checked up front with a remediation hint.
    pub fn new(session: impl Into<String>) -> Result<Self> {
        let session = session.into();
        if session.trim().is_empty() {
            return Err(PuzzleError::Authentication(
                "no session token provided or stored; run the authentication flow first"
                    .to_string(),
            ));
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| PuzzleError::Http(e.to_string()))?;
        Ok(Self { session, http })
    }

    /// Create a client by exchanging credentials for a fresh session
    ///
    /// # Errors
    /// Propagates authentication and transport failures from the login
    /// exchange.
    pub fn from_credentials(username: &str, password: &str) -> Result<Self> {
        let session = crate::auth::authenticate(username, password)?;
        Self::new(session)
    }

    /// Fetch the latest classic puzzle payload
    ///
    /// # Errors
    /// Returns `PuzzleError::Http` on transport failure and
    /// `PuzzleError::DataUnavailable` when the response envelope is empty.
    pub fn latest_classic(&self) -> Result<Value> {
        // The oracle is public; no session cookie needed for the lookup
        let oracle: OracleResponse = self.get_public(ORACLE_URL)?;
        let id = oracle.results.current.puzzle_id;
        log::debug!("oracle reports current puzzle id {id}");
        self.classic_by_id(id)
    }

    /// Fetch the classic puzzle payload for a date
    ///
    /// # Errors
    /// Returns `PuzzleError::PuzzleNotFound` when no puzzle is published
    /// for `date`.
    pub fn classic_by_date(&self, date: NaiveDate) -> Result<Value> {
        let lookup: LookupResponse = self.get_public(&classic_lookup_url(date))?;
        let entry = lookup.results.into_iter().next().ok_or_else(|| {
            PuzzleError::PuzzleNotFound(format!("no puzzle published for {date}"))
        })?;
        self.classic_by_id(entry.puzzle_id)
    }

    /// Fetch a classic puzzle payload by its id
    ///
    /// # Errors
    /// Returns `PuzzleError::Http` on transport failure and
    /// `PuzzleError::DataUnavailable` when the response envelope is empty.
    pub fn classic_by_id(&self, id: u64) -> Result<Value> {
        let url = classic_puzzle_url(id);
        let envelope: ClassicEnvelope = self.get_with_session(&url)?;
        envelope.results.into_iter().next().ok_or_else(|| {
            PuzzleError::DataUnavailable(format!("empty result envelope for puzzle {id}"))
        })
    }

    /// Fetch the variety puzzle payload for a date
    ///
    /// # Errors
    /// Returns `PuzzleError::PuzzleNotFound` when the provider answers with
    /// an HTTP error; for this endpoint that means no puzzle exists for the
    /// date.
    pub fn variety_by_date(&self, date: NaiveDate) -> Result<Value> {
        let url = variety_puzzle_url(date);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::COOKIE, self.session_cookie())
            .send()
            .map_err(|e| PuzzleError::Http(e.to_string()))?;

        if let Err(status_error) = response.error_for_status_ref() {
            log::debug!("variety fetch for {date} failed: {status_error}");
            return Err(PuzzleError::PuzzleNotFound(format!(
                "no variety puzzle found for {date}"
            )));
        }
        response.json().map_err(|e| PuzzleError::Http(e.to_string()))
    }

    /// Latest-puzzle search is not supported for variety puzzles
    ///
    /// # Errors
    /// Always fails: the provider exposes no oracle for this schema. Search
    /// by date instead.
    pub fn latest_variety(&self) -> Result<Value> {
        Err(PuzzleError::PuzzleNotFound(
            "latest-puzzle search is not supported for variety puzzles; \
             search by date instead"
                .to_string(),
        ))
    }

    fn session_cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.session)
    }

    fn get_public<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.http
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json)
            .map_err(|e| PuzzleError::Http(e.to_string()))
    }

    fn get_with_session<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.http
            .get(url)
            .header(reqwest::header::COOKIE, self.session_cookie())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json)
            .map_err(|e| PuzzleError::Http(e.to_string()))
    }
}

fn classic_puzzle_url(id: u64) -> String {
    format!("{CLASSIC_PUZZLE_URL}/{id}.json")
}

fn classic_lookup_url(date: NaiveDate) -> String {
    let day = date.format("%Y-%m-%d");
    format!(
        "{CLASSIC_LOOKUP_URL}?status=published&order=published&sort=asc&pad=false\
         &print_date_start={day}&print_date_end={day}&publish_type=daily"
    )
}

fn variety_puzzle_url(date: NaiveDate) -> String {
    format!("{VARIETY_PUZZLE_URL}/{}.json", date.format("%Y-%m-%d"))
}
