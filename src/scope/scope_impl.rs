// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core Scope implementation.

use super::nesting;
use crate::Level;
use crate::call_site::CallSite;
use crate::console_sink::ConsoleSink;
use crate::error::Result;
use crate::file_sink::FileSink;
use crate::log_record::LogRecord;
use crate::pack::pack;
use crate::sink::Sink;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

static CONSOLE: ConsoleSink = ConsoleSink::new();

/// An open logging scope.
///
/// Holds one level of nesting on the calling thread for as long as it lives.
/// Calls made while it is open, on sinks of the same kind, are indented one
/// level deeper than calls made in it.
///
/// # Examples
///
/// ```rust
/// use scopelog::{Level, Scope};
///
/// fn step() -> scopelog::Result<()> {
///     let scope = Scope::console(Level::Warning);
///     scope.emit(&scopelog::callsite!(), &[&"disk at ", &93, &"%"]);
///     Ok(())
/// }
/// # step().unwrap();
/// ```
pub struct Scope<'s> {
    level: Level,
    sink: &'s dyn Sink,
    depth: usize,
    // the counter belongs to the entering thread
    _thread_bound: PhantomData<*const ()>,
}

impl<'s> Scope<'s> {
    /// Opens a scope at `level` on `sink`.
    pub fn enter(level: Level, sink: &'s dyn Sink) -> Self {
        let depth = nesting::increment(sink.kind());
        Scope {
            level,
            sink,
            depth,
            _thread_bound: PhantomData,
        }
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Nesting depth when this scope was entered, including itself; 1 for a scope
    /// with no enclosing scope.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of indentation units a line emitted now would carry: the scopes of
    /// this kind currently open on the thread, minus this one.
    ///
    /// Scopes entered after this one and still open count too.
    #[inline]
    pub fn indent(&self) -> usize {
        // self is still open, so the live depth is at least 1
        nesting::nesting_depth(self.sink.kind()).saturating_sub(1)
    }

    pub fn sink(&self) -> &'s dyn Sink {
        self.sink
    }

    /// Whether [`Self::emit`] would write anything at the sink's current threshold.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.sink.threshold().admits(self.level)
    }

    /// Formats one line from `values` and hands it to the sink.
    ///
    /// If the scope's level does not pass the sink's threshold this does nothing
    /// at all: no formatting, no locking, no write.
    pub fn emit(&self, site: &CallSite, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        let record = LogRecord::capture(self.level, self.indent(), site, pack(values));
        self.sink.finish_log_record(record);
    }
}

impl Scope<'static> {
    /// Opens a scope on the console sink.
    pub fn console(level: Level) -> Self {
        Self::enter(level, &CONSOLE)
    }

    /// Opens a scope on the process-wide file sink.
    ///
    /// The first call in the process resolves and opens the log file.  Fails with
    /// [`Error::LogFileUnavailable`](crate::Error::LogFileUnavailable) if that open
    /// failed, now or earlier.  No nesting level is taken on failure.
    pub fn file(level: Level) -> Result<Self> {
        let sink = FileSink::global()?;
        Ok(Self::enter(level, sink))
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        nesting::decrement(self.sink.kind());
    }
}

impl Debug for Scope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("level", &self.level)
            .field("kind", &self.sink.kind())
            .field("depth", &self.depth)
            .finish()
    }
}

/*
Boilerplate notes.

Clone would double-release the nesting level, so no.
PartialEq/Hash: a scope is a live guard, not data.
Send/Sync: not implemented on purpose; see _thread_bound.
*/
