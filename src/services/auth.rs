//! Upstream authentication service client.
//!
//! DESIGN
//! ======
//! The login route talks to the backend through the `AuthBackend` trait so
//! tests can substitute a mock. `HttpAuthBackend` is a thin reqwest wrapper
//! around `POST <base>/auth/login`; response parsing is a pure function for
//! testability. Credential fields are forwarded verbatim — the backend is
//! the source of truth for rejecting missing or bad values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/auth/login";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Login form fields, forwarded to the backend as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

/// Outcome of a login attempt that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Backend accepted the credentials and issued a session token.
    Granted { token: String },
    /// Backend rejected the request; `body` is its error text, verbatim.
    Denied { status: u16, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("auth service request failed: {0}")]
    Upstream(String),
    #[error("auth service returned malformed body: {0}")]
    MalformedResponse(String),
}

/// Seam between the login route and the backend auth service.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, AuthError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

pub struct HttpAuthBackend {
    http: reqwest::Client,
    login_url: String,
}

impl HttpAuthBackend {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        let login_url = format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/'));
        Ok(Self { http, login_url })
    }
}

#[async_trait::async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, AuthError> {
        let response = self
            .http
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Ok(LoginOutcome::Denied { status: status.as_u16(), body });
        }

        let token = parse_token_response(&body)?;
        Ok(LoginOutcome::Granted { token })
    }
}

// =============================================================================
// WIRE TYPES / PARSING
// =============================================================================

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Extract the session token from a successful backend response body.
fn parse_token_response(json: &str) -> Result<String, AuthError> {
    let parsed: TokenResponse =
        serde_json::from_str(json).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
    Ok(parsed.token)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
