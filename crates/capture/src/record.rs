// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured console message records.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Console level a message was captured at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleLevel {
    Error,
    Warn,
}

/// One captured console call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedMessage {
    /// Sequence number across both levels within a session
    pub seq: u64,

    pub level: ConsoleLevel,

    /// Formatted message text
    pub message: String,

    /// Milliseconds since the session started
    pub elapsed_ms: u64,
}

/// JSONL sink for captured messages, shared by clones.
#[derive(Clone)]
pub(crate) struct RecordWriter {
    inner: Arc<Mutex<BufWriter<File>>>,
}

impl RecordWriter {
    pub(crate) fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(BufWriter::new(file))),
        })
    }

    /// Append one record. Write failures are logged, never propagated into
    /// the console call that produced the record.
    pub(crate) fn write(&self, record: &CapturedMessage) {
        let mut w = self.inner.lock();
        let result = serde_json::to_string(record)
            .map_err(std::io::Error::from)
            .and_then(|json| writeln!(w, "{}", json))
            .and_then(|()| w.flush());
        if let Err(err) = result {
            tracing::debug!(error = %err, "failed to write capture record");
        }
    }
}

impl std::fmt::Debug for RecordWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordWriter").finish_non_exhaustive()
    }
}
