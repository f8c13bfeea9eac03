// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Controllable clock for fixture timers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Fake clock shared between a fixture and the component under test.
///
/// Time only moves when the test advances it. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    current_millis: Arc<AtomicU64>,
}

impl FakeClock {
    /// Create a fake clock starting at a given time
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    /// Create a fake clock starting at Unix epoch
    pub fn at_epoch() -> Self {
        Self::new(0)
    }

    /// Current time in milliseconds
    pub fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }

    /// Advance time by a duration, returning the new time
    pub fn advance(&self, duration: Duration) -> u64 {
        self.advance_ms(duration.as_millis() as u64)
    }

    /// Advance time by milliseconds, returning the new time
    pub fn advance_ms(&self, ms: u64) -> u64 {
        self.current_millis.fetch_add(ms, Ordering::SeqCst) + ms
    }

    /// Set absolute time
    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }
}
