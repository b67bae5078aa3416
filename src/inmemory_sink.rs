// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps lines in memory instead of writing them anywhere.  Useful for:
//!
//! - Unit testing code that logs through scopelog
//! - Inspecting output programmatically
//! - Hosts that want to decide later whether a run's log is worth printing
//!
//! Unlike the built-in sinks, each `InMemorySink` carries its own [`Threshold`], so
//! tests can filter without touching process-wide state.  It still picks a
//! [`SinkKind`] so that its scopes nest with the kind it stands in for.

use crate::Level;
use crate::log_record::LogRecord;
use crate::sink::{Sink, SinkKind};
use crate::threshold::Threshold;
use std::sync::{Mutex, PoisonError};

/// A sink that stores formatted lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use scopelog::{InMemorySink, Level};
///
/// let sink = InMemorySink::new().with_threshold(Level::Warning);
/// scopelog::log_to!(&sink, Level::Error, "code=", 404);
/// scopelog::log_to!(&sink, Level::Info, "filtered");
///
/// let logs = sink.drain_logs();
/// assert!(logs.ends_with("[code=404]"));
/// assert!(!logs.contains("filtered"));
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    kind: SinkKind,
    threshold: Threshold,
    logs: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes and required by Sink trait
// - Default: Implemented with obvious zero-value (empty buffer, Info threshold)
// - Clone: NOT implemented - a copy would silently stop receiving lines
// - PartialEq/Eq/Hash: NOT implemented - mutex state comparison is problematic
// - Send/Sync: Automatically implemented due to Mutex usage (required for Sink trait)

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// An empty console-kind sink with an `Info` threshold.
    pub fn new() -> Self {
        Self {
            kind: SinkKind::Console,
            threshold: Threshold::new(Level::Info),
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Makes scopes on this sink share the nesting counter of `kind`.
    pub fn with_kind(mut self, kind: SinkKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_threshold(self, level: Level) -> Self {
        self.threshold.set(level);
        self
    }

    pub fn set_threshold(&self, level: Level) {
        self.threshold.set(level);
    }

    /// A copy of every line captured so far, oldest first, without newlines.
    pub fn lines(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Takes every captured line, leaving the buffer empty.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.logs.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Drains all lines into a single newline-joined string.
    pub fn drain_logs(&self) -> String {
        self.drain_lines().join("\n")
    }

    /// Writes every captured line to stdout under the console lock, then clears the
    /// buffer.
    pub fn drain_to_console(&self) {
        let lines = self.drain_lines();
        if lines.is_empty() {
            return;
        }
        let mut text = lines.join("\n");
        text.push('\n');
        crate::console_sink::write_console(&text);
    }
}

impl Sink for InMemorySink {
    fn kind(&self) -> SinkKind {
        self.kind
    }

    fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    fn finish_log_record(&self, record: LogRecord) {
        let line = record.to_string();
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        crate::config::hold_lock();
        logs.push(line);
    }
}
