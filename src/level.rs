// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.
//!
//! Levels are ordered by urgency: [`Level::Error`] is the most urgent and has the
//! lowest ordinal.  A message at level `L` is emitted by a sink whose threshold is `T`
//! exactly when `L <= T`.

use std::fmt::Display;

/// Names indexed by ordinal.  Slot 0 is reserved.
pub(crate) const LEVEL_NAMES: [&str; 5] = ["Reserved", "ERROR", "WARN", "INFO", "DEBUG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Something failed.
    Error = 1,
    /// Suspicious condition
    Warning = 2,
    /// Progress information
    Info = 3,
    /// Print-style debugging
    Debug = 4,
}

impl Level {
    /// Every level, most urgent first.
    pub const ALL: [Level; 4] = [Level::Error, Level::Warning, Level::Info, Level::Debug];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The name printed in the log header, e.g. `WARN`.
    #[inline]
    pub const fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Inverse of [`Level::ordinal`].  Returns `None` for 0 and anything past `Debug`.
    pub const fn from_ordinal(ordinal: u8) -> Option<Level> {
        match ordinal {
            1 => Some(Level::Error),
            2 => Some(Level::Warning),
            3 => Some(Level::Info),
            4 => Some(Level::Debug),
            _ => None,
        }
    }

    /// Whether a message at this level passes `threshold`.
    #[inline]
    pub fn passes(self, threshold: Level) -> bool {
        self <= threshold
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/*
Boilerplate notes.

Copy/Clone/Eq/Hash are trivially fine for a fieldless enum.
Ord follows the ordinal, which is what threshold comparison wants.
Default is deliberately absent: there is no level that is obviously "the" level.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_urgency() {
        assert_eq!(Level::Error.ordinal(), 1);
        assert_eq!(Level::Warning.ordinal(), 2);
        assert_eq!(Level::Info.ordinal(), 3);
        assert_eq!(Level::Debug.ordinal(), 4);
        assert!(Level::Error < Level::Warning);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn names() {
        let names: Vec<_> = Level::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, ["ERROR", "WARN", "INFO", "DEBUG"]);
        assert_eq!(Level::Warning.to_string(), "WARN");
    }

    #[test]
    fn from_ordinal_round_trips_and_rejects_reserved() {
        for level in Level::ALL {
            assert_eq!(Level::from_ordinal(level.ordinal()), Some(level));
        }
        assert_eq!(Level::from_ordinal(0), None);
        assert_eq!(Level::from_ordinal(5), None);
    }

    #[test]
    fn passes_is_less_or_equal() {
        assert!(Level::Info.passes(Level::Info));
        assert!(Level::Error.passes(Level::Info));
        assert!(!Level::Debug.passes(Level::Info));
    }
}
