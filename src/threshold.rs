// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity thresholds.
//!
//! Each built-in backend kind has one process-wide threshold, initially
//! [`Level::Info`].  A call at level `L` is emitted when `L <= threshold`.
//!
//! # Reconfiguring while logging
//!
//! The threshold lives in an atomic with relaxed ordering.  A reader always sees
//! some level that was stored, never a torn value, but there is no ordering between
//! [`set_system_threshold`] and emits already in flight on other threads.  Such a
//! call may be filtered by either the old or the new threshold.  Configure
//! thresholds before starting threads that log if that matters.

use crate::Level;
use crate::sink::SinkKind;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU8, Ordering};

/// A shared, mutable threshold.
pub struct Threshold {
    level: AtomicU8,
}

impl Threshold {
    pub const fn new(level: Level) -> Self {
        Self {
            level: AtomicU8::new(level.ordinal()),
        }
    }

    #[inline]
    pub fn get(&self) -> Level {
        // only ordinals of real levels are ever stored
        Level::from_ordinal(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Debug)
    }

    #[inline]
    pub fn set(&self, level: Level) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Whether a message at `level` passes this threshold.
    #[inline]
    pub fn admits(&self, level: Level) -> bool {
        level.passes(self.get())
    }
}

impl Debug for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Threshold").field(&self.get()).finish()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

static CONSOLE_THRESHOLD: Threshold = Threshold::new(Level::Info);
static FILE_THRESHOLD: Threshold = Threshold::new(Level::Info);

pub(crate) fn system_threshold_cell(kind: SinkKind) -> &'static Threshold {
    match kind {
        SinkKind::Console => &CONSOLE_THRESHOLD,
        SinkKind::File => &FILE_THRESHOLD,
    }
}

/// Sets the threshold of the built-in sinks of `kind`.
///
/// See the [module documentation](self) for what this means for concurrent emits.
pub fn set_system_threshold(kind: SinkKind, level: Level) {
    system_threshold_cell(kind).set(level);
}

pub fn system_threshold(kind: SinkKind) -> Level {
    system_threshold_cell(kind).get()
}
