//! Verified-session extractor for protected handlers.
//! Used by: handlers::session.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::console;
use crate::error::Error;
use crate::session::claims::SessionClaims;
use crate::session::jar::read_session;
use crate::state::AppState;

/// Claims from a request whose `auth-token` cookie verified.
///
/// Rejects with `401 Unauthorized` when the cookie is missing, forged,
/// malformed, or expired. Handlers never see unverified claims.
#[derive(Debug, Clone)]
pub struct AuthSession(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match read_session(&jar, &state.keys) {
            Ok(claims) => {
                state.metrics.record_verify();
                console::log_verify(&claims.user_id);
                Ok(Self(claims))
            }
            Err(e) if e.is_rejection() => {
                state.metrics.record_reject();
                tracing::info!(reason = %e, "session rejected");
                console::log_reject(&e.to_string());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
