//! Metrics tracking.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub sessions_issued: AtomicU64,
    pub sessions_verified: AtomicU64,
    pub sessions_rejected: AtomicU64,
    pub sessions_cleared: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            sessions_issued: AtomicU64::new(0),
            sessions_verified: AtomicU64::new(0),
            sessions_rejected: AtomicU64::new(0),
            sessions_cleared: AtomicU64::new(0),
        }
    }

    pub fn record_issue(&self) {
        self.sessions_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_verify(&self) {
        self.sessions_verified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reject(&self) {
        self.sessions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_clear(&self) {
        self.sessions_cleared.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sessions_issued: self.sessions_issued.load(Ordering::Relaxed),
            sessions_verified: self.sessions_verified.load(Ordering::Relaxed),
            sessions_rejected: self.sessions_rejected.load(Ordering::Relaxed),
            sessions_cleared: self.sessions_cleared.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub sessions_issued: u64,
    pub sessions_verified: u64,
    pub sessions_rejected: u64,
    pub sessions_cleared: u64,
}
