// src/flows/generation.rs
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter for one flow.
///
/// Every trigger takes a fresh token; a response is only rendered while its token
/// is still the latest one issued.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
