// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide console sink.
//!
//! Code under test reports problems through [`error`] and [`warn`] (or the
//! [`console_error!`](crate::console_error) and
//! [`console_warn!`](crate::console_warn) macros). Each level is a single
//! global function slot. By default the slots forward to `tracing` under the
//! `console` target; a [`ConsoleTracker`](crate::ConsoleTracker) temporarily
//! replaces them with capturing wrappers.
//!
//! The slots have a single writer at a time. Two trackers started on
//! overlapping windows restore each other's wrappers out of order. Test
//! suites running on parallel threads should hold [`exclusive`] for the
//! whole start/stop window.

use crate::format::{format_message, ConsoleArg};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard, RwLock};
use std::sync::{Arc, LazyLock};

/// A console output function.
pub type ConsoleFn = Arc<dyn Fn(&[ConsoleArg]) + Send + Sync>;

struct Sinks {
    error: ConsoleFn,
    warn: ConsoleFn,
}

static SINKS: LazyLock<RwLock<Sinks>> = LazyLock::new(|| {
    RwLock::new(Sinks {
        error: Arc::new(default_error),
        warn: Arc::new(default_warn),
    })
});

static EXCLUSIVE: LazyLock<ReentrantMutex<()>> = LazyLock::new(|| ReentrantMutex::new(()));

fn default_error(args: &[ConsoleArg]) {
    tracing::error!(target: "console", "{}", format_message(args));
}

fn default_warn(args: &[ConsoleArg]) {
    tracing::warn!(target: "console", "{}", format_message(args));
}

/// Report an error-level console message.
pub fn error(args: &[ConsoleArg]) {
    // Clone out of the lock so sinks may call back into this module.
    let sink = Arc::clone(&SINKS.read().error);
    sink(args);
}

/// Report a warning-level console message.
pub fn warn(args: &[ConsoleArg]) {
    let sink = Arc::clone(&SINKS.read().warn);
    sink(args);
}

/// The function currently installed for errors
pub fn error_fn() -> ConsoleFn {
    Arc::clone(&SINKS.read().error)
}

/// The function currently installed for warnings
pub fn warn_fn() -> ConsoleFn {
    Arc::clone(&SINKS.read().warn)
}

/// Install a new error function, returning the one it replaced.
pub fn replace_error_fn(sink: ConsoleFn) -> ConsoleFn {
    std::mem::replace(&mut SINKS.write().error, sink)
}

/// Install a new warning function, returning the one it replaced.
pub fn replace_warn_fn(sink: ConsoleFn) -> ConsoleFn {
    std::mem::replace(&mut SINKS.write().warn, sink)
}

/// Guard returned by [`exclusive`].
///
/// Reentrant: the holding thread may call [`exclusive`] again.
pub struct ConsoleLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl std::fmt::Debug for ConsoleLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLock").finish_non_exhaustive()
    }
}

/// Serialize console sessions across threads.
///
/// Blocks until no other thread holds the lock.
pub fn exclusive() -> ConsoleLock {
    ConsoleLock {
        _guard: EXCLUSIVE.lock(),
    }
}

/// Log an error through the process console.
///
/// Each argument is converted with `ConsoleArg::from`:
///
/// ```
/// use shopqa_capture::{console_error, ConsoleArg};
///
/// console_error!("payout failed for", 42u64, ConsoleArg::named_error("Error", "timeout"));
/// ```
#[macro_export]
macro_rules! console_error {
    ($($arg:expr),* $(,)?) => {
        $crate::console::error(&[$($crate::ConsoleArg::from($arg)),*])
    };
}

/// Log a warning through the process console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:expr),* $(,)?) => {
        $crate::console::warn(&[$($crate::ConsoleArg::from($arg)),*])
    };
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
