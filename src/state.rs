//! Shared application state.

use std::sync::Arc;

use crate::config::{Config, Environment, SessionSecret};
use crate::session::keys::SessionKeys;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub keys: SessionKeys,
    pub environment: Environment,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder {
    secret: SessionSecret,
    environment: Environment,
}

impl StateBuilder {
    fn build(self) -> AppState {
        if !self.environment.is_production() {
            tracing::warn!("non-production environment: session cookies are not marked Secure");
        }

        Arc::new(AppStateInner {
            keys: SessionKeys::new(&self.secret),
            environment: self.environment,
            metrics: Metrics::new(),
        })
    }
}

pub fn build_state(config: &Config) -> AppState {
    StateBuilder {
        secret: config.secret.clone(),
        environment: config.environment,
    }
    .build()
}

#[cfg(test)]
pub fn build_test_state(environment: Environment) -> crate::error::Result<AppState> {
    Ok(StateBuilder {
        secret: SessionSecret::new("test-secret-key-that-is-long-enough!")?,
        environment,
    }
    .build())
}
