//! Session lifecycle over a cookie jar: create, read, delete.
//! Used by: handlers::session, extract.

use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};

use crate::config::Environment;
use crate::error::{Error, Result};
use crate::session::claims::SessionClaims;
use crate::session::cookie::{clear_session_cookie, session_cookie, SESSION_COOKIE_NAME};
use crate::session::keys::SessionKeys;
use crate::session::sign::sign_session;
use crate::session::verify::verify_session;

/// Signs a fresh seven-day token for `user_id` and sets it on `jar`.
///
/// No format checks are made on `user_id` or `email`; callers validate.
pub fn create_session(
    jar: CookieJar,
    keys: &SessionKeys,
    environment: Environment,
    user_id: &str,
    email: &str,
) -> Result<(CookieJar, SessionClaims)> {
    create_session_at(jar, keys, environment, user_id, email, Utc::now())
}

pub(crate) fn create_session_at(
    jar: CookieJar,
    keys: &SessionKeys,
    environment: Environment,
    user_id: &str,
    email: &str,
    now: DateTime<Utc>,
) -> Result<(CookieJar, SessionClaims)> {
    let claims = SessionClaims::issued_at(user_id, email, now);
    let token = sign_session(&claims, keys)?;
    let cookie = session_cookie(token, claims.expires_at, environment)?;
    tracing::debug!(user_id = %claims.user_id, exp = claims.exp, "session token signed");
    Ok((jar.add(cookie), claims))
}

/// Verified claims from the request's session cookie.
pub fn read_session(jar: &CookieJar, keys: &SessionKeys) -> Result<SessionClaims> {
    let cookie = jar.get(SESSION_COOKIE_NAME).ok_or(Error::MissingSession)?;
    verify_session(cookie.value(), keys)
}

pub fn delete_session(jar: CookieJar) -> CookieJar {
    jar.add(clear_session_cookie())
}
