//! Cooperative cancellation for long pattern generations.
//!
//! The synthesizer and refiner check the token once per outer iteration and
//! return their partial result when it fires; in-progress session state is
//! simply discarded. There is exactly one writer per session, so no further
//! synchronization is needed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag, cheap to clone across threads.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; observed at the next outer-iteration check.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
