//! HS256 keys derived once from the session secret.
//! Used by: session::sign, session::verify, state.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::config::SessionSecret;

pub const SESSION_ALGORITHM: Algorithm = Algorithm::HS256;

pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn new(secret: &SessionSecret) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

#[cfg(test)]
pub(crate) fn test_keys(seed: char) -> SessionKeys {
    let secret = SessionSecret::new(seed.to_string().repeat(32))
        .unwrap_or_else(|e| panic!("test secret: {e}"));
    SessionKeys::new(&secret)
}
