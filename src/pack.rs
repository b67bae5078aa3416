// SPDX-License-Identifier: MIT OR Apache-2.0

//! Packs the values of a log call into the bracketed payload.
//!
//! Each value is rendered with its [`Display`] implementation and the results are
//! concatenated with nothing in between, so `1` and `"OK"` become `[1OK]`.
//! Callers who want separators pass them as values.

use std::fmt::{Display, Write};

/// Incremental payload builder.
///
/// ```rust
/// use scopelog::Packer;
/// let mut packer = Packer::new();
/// packer.write_val(&"answer=");
/// packer.write_val(&42);
/// assert_eq!(packer.finish(), "[answer=42]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packer {
    buf: String,
}

impl Packer {
    pub fn new() -> Self {
        let mut buf = String::with_capacity(32);
        buf.push('[');
        Self { buf }
    }

    #[inline]
    pub fn write_val(&mut self, value: &dyn Display) {
        // writing into a String cannot fail
        let _ = write!(self.buf, "{value}");
    }

    pub fn finish(mut self) -> String {
        self.buf.push(']');
        self.buf
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new()
    }
}

/// Packs `values` in order.  An empty slice packs to `[]`.
pub fn pack(values: &[&dyn Display]) -> String {
    let mut packer = Packer::new();
    for value in values {
        packer.write_val(*value);
    }
    packer.finish()
}
