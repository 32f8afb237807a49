//! HS256 session token signing.
//! Used by: session::jar.

use jsonwebtoken::{encode, Header};

use crate::error::{Error, Result};
use crate::session::claims::SessionClaims;
use crate::session::keys::{SessionKeys, SESSION_ALGORITHM};

pub fn sign_session(claims: &SessionClaims, keys: &SessionKeys) -> Result<String> {
    encode(&Header::new(SESSION_ALGORITHM), claims, keys.encoding())
        .map_err(|e| Error::Signing(e.to_string()))
}
