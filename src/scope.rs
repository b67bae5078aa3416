// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoped logging: nesting depth, level filtering and dispatch.
//!
//! Every log call happens inside a [`Scope`].  Entering a scope bumps the calling
//! thread's nesting counter for the sink's [`SinkKind`](crate::SinkKind); dropping
//! the scope puts it back.  Because release happens in `Drop`, the counter is
//! restored on every exit path: normal return, `?`, or a panic unwinding through
//! the frame.
//!
//! The depth a scope observes includes the scope itself.  Lines are indented by the
//! number of *enclosing* scopes, so a call made outside any other scope is not
//! indented at all.  The count is taken when the line is emitted: a scope that
//! emits while a scope it encloses is still open is indented by that one as well.
//!
//! ```rust
//! use scopelog::{InMemorySink, Level, Scope, SinkKind, callsite, nesting_depth};
//!
//! let sink = InMemorySink::new();
//! fn parse(sink: &InMemorySink) {
//!     let scope = Scope::enter(Level::Info, sink);
//!     scope.emit(&callsite!(), &[&"parsing"]);
//! }
//!
//! {
//!     let outer = Scope::enter(Level::Info, &sink);
//!     outer.emit(&callsite!(), &[&"start"]);
//!     parse(&sink);
//!     assert_eq!(nesting_depth(SinkKind::Console), 1);
//! }
//! assert_eq!(nesting_depth(SinkKind::Console), 0);
//!
//! let lines = sink.lines();
//! assert!(lines[0].ends_with(" [start]"));
//! assert!(lines[1].contains("   INFO     ")); // one level of indentation
//! ```
//!
//! Scopes are tied to the thread that entered them; they are neither `Send` nor
//! `Sync`.  Other threads keep their own counters and never see each other's depth.

mod nesting;
mod scope_impl;

#[cfg(test)]
mod tests;

pub use nesting::nesting_depth;
pub use scope_impl::Scope;
