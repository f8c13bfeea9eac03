// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console error tracker.

use crate::console::{self, ConsoleFn};
use crate::format::{format_message, ConsoleArg};
use crate::patterns::default_setup_patterns;
use crate::record::{CapturedMessage, ConsoleLevel, RecordWriter};
use crate::report::{self, CategorizedErrors, UnexpectedConsoleOutput};
use parking_lot::Mutex;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// State shared between the tracker and its installed wrappers.
struct Buffers {
    started: Instant,
    records: Vec<CapturedMessage>,
    ignored: Vec<Regex>,
    setup: Vec<Regex>,
}

impl Buffers {
    fn reset(&mut self) {
        self.started = Instant::now();
        self.records.clear();
    }

    /// Record a message unless it is an ignored error.
    fn capture(&mut self, level: ConsoleLevel, message: String) -> Option<CapturedMessage> {
        if level == ConsoleLevel::Error && self.ignored.iter().any(|re| re.is_match(&message)) {
            return None;
        }
        let record = CapturedMessage {
            seq: self.records.len() as u64,
            level,
            message,
            elapsed_ms: self.started.elapsed().as_millis() as u64,
        };
        self.records.push(record.clone());
        Some(record)
    }

    fn messages(&self, level: ConsoleLevel) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    fn is_setup(&self, message: &str) -> bool {
        self.setup.iter().any(|re| re.is_match(message))
    }
}

/// Console functions saved at `start()`, restored at `stop()`.
struct Session {
    saved_error: ConsoleFn,
    saved_warn: ConsoleFn,
}

/// Captures console errors and warnings for the lifetime of one test.
///
/// `start()` swaps the process console functions for wrappers that record
/// each call and then forward it to the saved function; `stop()` puts the
/// saved functions back. Queries and assertions work while tracking and
/// after stopping. Dropping an active tracker stops it.
///
/// Only one tracker may be active at a time (see [`console`]).
pub struct ConsoleTracker {
    buffers: Arc<Mutex<Buffers>>,
    session: Mutex<Option<Session>>,
    writer: Option<RecordWriter>,
}

impl ConsoleTracker {
    /// Create an idle tracker with the default setup patterns
    pub fn new() -> Self {
        Self {
            buffers: Arc::new(Mutex::new(Buffers {
                started: Instant::now(),
                records: Vec::new(),
                ignored: Vec::new(),
                setup: default_setup_patterns(),
            })),
            session: Mutex::new(None),
            writer: None,
        }
    }

    /// Create a tracker that also appends every capture to a JSONL file
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let mut tracker = Self::new();
        tracker.writer = Some(RecordWriter::create(path)?);
        Ok(tracker)
    }

    /// Begin intercepting console output. Clears previously captured
    /// messages. A second call while tracking only logs a warning.
    pub fn start(&self) {
        let mut session = self.session.lock();
        if session.is_some() {
            tracing::warn!("console tracker already started, ignoring start()");
            return;
        }

        self.buffers.lock().reset();

        let saved_error = console::error_fn();
        let saved_warn = console::warn_fn();
        console::replace_error_fn(self.wrapper(ConsoleLevel::Error, Arc::clone(&saved_error)));
        console::replace_warn_fn(self.wrapper(ConsoleLevel::Warn, Arc::clone(&saved_warn)));

        *session = Some(Session {
            saved_error,
            saved_warn,
        });
        tracing::trace!("console tracker started");
    }

    /// Restore the console functions saved by `start()`. No-op when idle.
    pub fn stop(&self) {
        if let Some(saved) = self.session.lock().take() {
            console::replace_error_fn(saved.saved_error);
            console::replace_warn_fn(saved.saved_warn);
            tracing::trace!("console tracker stopped");
        }
    }

    /// Whether the tracker is currently intercepting
    pub fn is_active(&self) -> bool {
        self.session.lock().is_some()
    }

    fn wrapper(&self, level: ConsoleLevel, original: ConsoleFn) -> ConsoleFn {
        let buffers = Arc::clone(&self.buffers);
        let writer = self.writer.clone();
        Arc::new(move |args: &[ConsoleArg]| {
            let captured = buffers.lock().capture(level, format_message(args));
            if let (Some(writer), Some(record)) = (&writer, &captured) {
                writer.write(record);
            }
            original(args);
        })
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Captured error messages in capture order
    pub fn errors(&self) -> Vec<String> {
        self.buffers.lock().messages(ConsoleLevel::Error)
    }

    /// Captured warning messages in capture order
    pub fn warnings(&self) -> Vec<String> {
        self.buffers.lock().messages(ConsoleLevel::Warn)
    }

    /// All captured records, both levels interleaved
    pub fn records(&self) -> Vec<CapturedMessage> {
        self.buffers.lock().records.clone()
    }

    pub fn has_errors(&self) -> bool {
        self.buffers
            .lock()
            .records
            .iter()
            .any(|r| r.level == ConsoleLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.buffers
            .lock()
            .records
            .iter()
            .any(|r| r.level == ConsoleLevel::Warn)
    }

    /// Split captured errors into application and setup errors.
    pub fn categorized_errors(&self) -> CategorizedErrors {
        let buffers = self.buffers.lock();
        let (setup_errors, application_errors) = buffers
            .messages(ConsoleLevel::Error)
            .into_iter()
            .partition(|m| buffers.is_setup(m));
        CategorizedErrors {
            application_errors,
            setup_errors,
        }
    }

    /// Human-readable error and warning counts
    pub fn summary(&self) -> String {
        let warnings = self.warnings().len();
        report::summary(&self.categorized_errors(), warnings)
    }

    // -------------------------------------------------------------------
    // Assertions
    // -------------------------------------------------------------------

    /// Fail if any error was captured, setup errors included.
    pub fn expect_no_errors(&self) -> Result<(), UnexpectedConsoleOutput> {
        let errors = self.categorized_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(UnexpectedConsoleOutput { errors })
        }
    }

    /// Fail only on application errors. Setup errors alone produce a
    /// warning log and pass.
    pub fn expect_no_app_errors(&self) -> Result<(), UnexpectedConsoleOutput> {
        let errors = self.categorized_errors();
        if !errors.application_errors.is_empty() {
            return Err(UnexpectedConsoleOutput { errors });
        }
        if let Some(first) = errors.setup_errors.first() {
            tracing::warn!(
                count = errors.setup_errors.len(),
                first = %first,
                "setup errors captured; test wiring may be incomplete"
            );
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Pattern sets
    // -------------------------------------------------------------------

    /// Drop future errors matching `pattern`. Already captured errors stay.
    pub fn add_ignored_pattern(&self, pattern: Regex) {
        self.buffers.lock().ignored.push(pattern);
    }

    pub fn clear_ignored_patterns(&self) {
        self.buffers.lock().ignored.clear();
    }

    pub fn ignored_patterns(&self) -> Vec<Regex> {
        self.buffers.lock().ignored.clone()
    }

    /// Treat errors matching `pattern` as setup errors.
    pub fn add_setup_pattern(&self, pattern: Regex) {
        self.buffers.lock().setup.push(pattern);
    }

    /// Baseline setup patterns followed by added ones
    pub fn setup_patterns(&self) -> Vec<Regex> {
        self.buffers.lock().setup.clone()
    }
}

impl Default for ConsoleTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ConsoleTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for ConsoleTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleTracker")
            .field("active", &self.is_active())
            .field("records", &self.buffers.lock().records.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
