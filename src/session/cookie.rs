//! Session cookie assembly.
//! Used by: session::jar.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use time::{Duration, OffsetDateTime};

use crate::config::Environment;
use crate::error::{Error, Result};

pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Create session cookie. `Secure` only in production.
pub fn session_cookie(
    token: String,
    expires_at: DateTime<Utc>,
    environment: Environment,
) -> Result<Cookie<'static>> {
    let expires = OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
        .map_err(|e| Error::Signing(format!("cookie expiry: {e}")))?;

    Ok(Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .secure(environment.is_production())
        .same_site(SameSite::Lax)
        .path("/")
        .expires(expires)
        .build())
}

/// Create removal cookie for session.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
