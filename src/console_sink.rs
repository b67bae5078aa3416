// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::{Sink, SinkKind};
use crate::threshold::{Threshold, system_threshold_cell};
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Serializes every write this crate makes to stdout.
static CONSOLE_LOCK: Mutex<()> = Mutex::new(());

/// Writes `line` to stdout under the console lock.
///
/// Write errors are ignored; there is nowhere better to report them.
pub(crate) fn write_console(line: &str) {
    write_serialized(&mut std::io::stdout().lock(), line);
}

/// Writes `line` to `out` as one unit under the console lock.
fn write_serialized<W: Write>(out: &mut W, line: &str) {
    let _guard = CONSOLE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    crate::config::hold_lock();
    let _ = out.write_all(line.as_bytes());
    let _ = out.flush();
}

/**
A sink that writes to stdout.

All instances share one process-wide lock, so lines from concurrent threads never
interleave.  The lock is independent of the file sink's.
 */
#[derive(Debug, Clone)]
pub struct ConsoleSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone: Already derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances are equivalent (zero-sized)
// - Hash: Implemented - consistent with Eq
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: Automatically implemented - zero-sized struct is always thread-safe

impl Copy for ConsoleSink {}

impl PartialEq for ConsoleSink {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ConsoleSink {}

impl std::hash::Hash for ConsoleSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn threshold(&self) -> &Threshold {
        system_threshold_cell(SinkKind::Console)
    }

    fn finish_log_record(&self, record: LogRecord) {
        self.finish_log_record_to(&mut std::io::stdout().lock(), record);
    }
}

impl ConsoleSink {
    fn finish_log_record_to<W: Write>(&self, out: &mut W, record: LogRecord) {
        write_serialized(out, &record.to_line());
    }
}
