//! Login proxy route — forwards credentials to the backend auth service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::services::auth::{Credentials, LoginOutcome};
use crate::state::AppState;

pub const SESSION_COOKIE_NAME: &str = "session";

const SESSION_MAX_AGE: time::Duration = time::Duration::hours(24);

/// `POST /login` — forward credentials upstream; on success set the session
/// cookie and return `{"success": true}`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Response {
    match state.auth.login(&credentials).await {
        Ok(LoginOutcome::Granted { token }) => {
            let jar = jar.add(session_cookie(token, state.config.cookie_secure()));
            (jar, Json(serde_json::json!({ "success": true }))).into_response()
        }
        // Rejections surface as 401 with the backend's error text, verbatim.
        Ok(LoginOutcome::Denied { status, body }) => {
            tracing::debug!(upstream_status = status, "login rejected by auth service");
            (StatusCode::UNAUTHORIZED, body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "auth service call failed");
            (StatusCode::BAD_GATEWAY, "authentication service unavailable").into_response()
        }
    }
}

/// Session cookie carrying the backend-issued token.
pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(SESSION_MAX_AGE)
        .build()
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
