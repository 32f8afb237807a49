//! Sign-in, current-session, and sign-out endpoints.
//! Used by: server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::console;
use crate::error::{Error, Result};
use crate::extract::AuthSession;
use crate::session::claims::SessionClaims;
use crate::session::jar::{create_session, delete_session};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
    pub expires_at: String,
}

impl From<SessionClaims> for SessionResponse {
    fn from(claims: SessionClaims) -> Self {
        Self {
            expires_at: claims.expires_at.to_rfc3339(),
            user_id: claims.user_id,
            email: claims.email,
        }
    }
}

fn validate_request(req: &LoginRequest) -> Result<()> {
    if req.user_id.is_empty() || req.user_id.len() > 256 {
        return Err(Error::Validation("user_id must be 1-256 characters".into()));
    }
    if req.user_id.chars().any(|c| c.is_control()) {
        return Err(Error::Validation("user_id contains control characters".into()));
    }
    if req.email.is_empty() || req.email.len() > 256 || !req.email.contains('@') {
        return Err(Error::Validation("email must be 1-256 characters and contain '@'".into()));
    }
    if req.email.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(Error::Validation("email contains whitespace or control characters".into()));
    }
    Ok(())
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    validate_request(&req)?;
    let (jar, claims) = create_session(jar, &state.keys, state.environment, &req.user_id, &req.email)?;
    tracing::info!(user_id = %claims.user_id, exp = claims.exp, secure = state.environment.is_production(), "session issued");
    console::log_issue(&claims.user_id, claims.exp);
    state.metrics.record_issue();
    Ok((jar, Json(claims.into())))
}

pub async fn current(AuthSession(claims): AuthSession) -> Json<SessionResponse> {
    Json(claims.into())
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (StatusCode, CookieJar) {
    tracing::info!("session cleared");
    console::log_logout();
    state.metrics.record_clear();
    (StatusCode::NO_CONTENT, delete_session(jar))
}
