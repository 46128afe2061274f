//! Credential exchange against the provider's login endpoint
//!
//! The provider's mobile login flow exchanges a username and password for a
//! long-lived ciphered session cookie. Only that cookie value is retained;
//! credentials are used once and dropped.

use crosspuz_core::{PuzzleError, Result};
use serde::Deserialize;

/// Login endpoint of the provider's account service
const LOGIN_URL: &str = "https://myaccount.nytimes.com/svc/ios/v2/login";

/// Name of the session cookie carrying the auth token
pub const SESSION_COOKIE: &str = "NYT-S";

// The endpoint only answers the mobile crossword client, so the request
// must carry its user agent and client id.
const LOGIN_USER_AGENT: &str = "Crossword/1844.220922 CFNetwork/1335.0.3 Darwin/21.6.0";
const LOGIN_CLIENT_ID: &str = "ios.crosswords";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    #[serde(default)]
    cookies: Vec<LoginCookie>,
}

#[derive(Debug, Deserialize)]
struct LoginCookie {
    name: String,
    #[serde(rename = "cipheredValue", default)]
    ciphered_value: String,
}

/// Exchange credentials for a session token
///
/// # Errors
/// Returns `PuzzleError::Http` on transport or server failure and
/// `PuzzleError::Authentication` when the response carries no usable
/// session cookie (typically wrong credentials).
pub fn authenticate(username: &str, password: &str) -> Result<String> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(LOGIN_URL)
        .header(reqwest::header::USER_AGENT, LOGIN_USER_AGENT)
        .header("client_id", LOGIN_CLIENT_ID)
        .form(&[("login", username), ("password", password)])
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| PuzzleError::Http(e.to_string()))?;

    let body: LoginResponse = response
        .json()
        .map_err(|e| PuzzleError::Http(format!("undecodable login response: {e}")))?;

    extract_session_token(&body)
}

fn extract_session_token(body: &LoginResponse) -> Result<String> {
    body.data
        .cookies
        .iter()
        .find(|c| c.name == SESSION_COOKIE && !c.ciphered_value.is_empty())
        .map(|c| c.ciphered_value.clone())
        .ok_or_else(|| {
            PuzzleError::Authentication(format!(
                "{SESSION_COOKIE} cookie not found in login response; check the credentials"
            ))
        })
}
