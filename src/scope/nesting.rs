// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread nesting counters, one per sink kind.

use crate::sink::SinkKind;
use std::cell::Cell;

thread_local! {
    static DEPTH: [Cell<usize>; 2] = const { [Cell::new(0), Cell::new(0)] };
}

/// Number of scopes on `kind` currently open on the calling thread.
pub fn nesting_depth(kind: SinkKind) -> usize {
    DEPTH.with(|depth| depth[kind.index()].get())
}

/// Opens one level and returns the new depth.
pub(crate) fn increment(kind: SinkKind) -> usize {
    DEPTH.with(|depth| {
        let cell = &depth[kind.index()];
        let next = cell.get() + 1;
        cell.set(next);
        next
    })
}

/// Closes one level.  Never goes below zero.
pub(crate) fn decrement(kind: SinkKind) {
    DEPTH.with(|depth| {
        let cell = &depth[kind.index()];
        cell.set(cell.get().saturating_sub(1));
    })
}
