//! Claims carried inside a session token.
//! Used by: session::sign, session::verify, session::jar, handlers::session.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Seven days.
pub const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: String,
    pub email: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for a session starting at `now`, truncated to whole seconds so
    /// that `expires_at`, `exp` and the cookie expiry name the same instant.
    pub fn issued_at(user_id: &str, email: &str, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(0);
        let expires_at = now + Duration::seconds(SESSION_TTL_SECONDS);
        Self {
            user_id: user_id.to_owned(),
            email: email.to_owned(),
            expires_at,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}
