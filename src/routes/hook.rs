//! Session hook — runs before every handler.
//!
//! Reads the `session` cookie from the incoming request and delegates to the
//! downstream handler unconditionally. Redirecting unauthenticated traffic
//! to the login page is deliberately not enforced here; see DESIGN.md.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::routes::login::SESSION_COOKIE_NAME;

/// Transparent middleware: observes the session cookie, never blocks.
pub async fn session_hook(request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let session = jar.get(SESSION_COOKIE_NAME).map(Cookie::value);

    tracing::debug!(
        path = %request.uri().path(),
        has_session = session.is_some(),
        "session hook"
    );

    next.run(request).await
}

#[cfg(test)]
#[path = "hook_test.rs"]
mod tests;
