//! HS256 session token verification.
//! Used by: session::jar, extract.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Validation};

use crate::error::{Error, Result};
use crate::session::claims::SessionClaims;
use crate::session::keys::{SessionKeys, SESSION_ALGORITHM};

fn validation() -> Validation {
    let mut validation = Validation::new(SESSION_ALGORITHM);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "iat"]);
    validation
}

/// Checks signature, algorithm and expiry before any claim is returned.
pub fn verify_session(token: &str, keys: &SessionKeys) -> Result<SessionClaims> {
    let claims = decode::<SessionClaims>(token, keys.decoding(), &validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => Error::TokenExpired,
            ErrorKind::InvalidSignature => Error::InvalidSignature,
            _ => Error::InvalidToken(e.to_string()),
        })?;

    if claims.expires_at.timestamp() != claims.exp {
        return Err(Error::InvalidToken("expiresAt does not match exp".into()));
    }

    Ok(claims)
}
