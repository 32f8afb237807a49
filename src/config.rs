//! Process configuration, loaded once at startup.
//! Used by: main, state.

use std::fmt;

use crate::error::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// HS256 keys shorter than the digest size are rejected.
pub const MIN_SECRET_LEN: usize = 32;

/// Symmetric signing secret. Never printed.
#[derive(Clone)]
pub struct SessionSecret(Vec<u8>);

impl SessionSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::Config("session secret is empty".into()));
        }
        if bytes.len() < MIN_SECRET_LEN {
            return Err(Error::Config(format!(
                "session secret must be at least {} bytes, got {}",
                MIN_SECRET_LEN,
                bytes.len()
            )));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub secret: SessionSecret,
    pub environment: Environment,
    pub bind_addr: String,
}

impl Config {
    /// Reads `SESSION_SECRET`, `APP_ENV` and `BIND_ADDR` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("SESSION_SECRET")
            .ok_or_else(|| Error::Config("SESSION_SECRET is required".into()))?;
        let secret = SessionSecret::new(secret.into_bytes())?;

        let environment = lookup("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());

        Ok(Self {
            secret,
            environment,
            bind_addr,
        })
    }
}
