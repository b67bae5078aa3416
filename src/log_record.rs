// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! A [`LogRecord`] is one formatted line on its way to a sink: the header built by
//! [`format_header`](crate::header::format_header) and the payload built by
//! [`pack`](crate::pack::pack).  It is created only after the level check passed,
//! so a filtered call never pays for formatting.
//!
//! Sinks write `record` followed by a newline as a single unit under their lock.

use crate::Level;
use crate::call_site::CallSite;
use std::fmt::Display;

/**
A formatted log line.

The record is owned and immutable once built.  [`Display`] renders the exact bytes
a sink writes, minus the trailing newline.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    level: Level,
    header: String,
    payload: String,
}

impl LogRecord {
    pub fn new(level: Level, header: String, payload: String) -> Self {
        Self {
            level,
            header,
            payload,
        }
    }

    /// Builds the record for a call at `site`, stamping it with the current process,
    /// thread and local time.
    pub fn capture(level: Level, indent: usize, site: &CallSite, payload: String) -> Self {
        let header = crate::header::format_header(
            crate::sys::process_id(),
            crate::sys::thread_tag(),
            &crate::sys::now_local(),
            level,
            indent,
            site,
        );
        Self::new(level, header, payload)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// The bracketed payload, e.g. `[1OK]`.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The full line including the trailing newline, ready for a single write.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.header.len() + self.payload.len() + 1);
        line.push_str(&self.header);
        line.push_str(&self.payload);
        line.push('\n');
        line
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header)?;
        f.write_str(&self.payload)
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug/Clone: Derived, records are forwarded by value and sometimes duplicated by tests
- PartialEq/Eq/Hash: Derived, plain data
- Display: the line as written, without the newline

NOT IMPLEMENTED:
- Default: a record without a header is not a line
- Copy: owns Strings
- Ord: no meaningful ordering between lines
*/
