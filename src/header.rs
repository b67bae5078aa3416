// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-format line prefix.
//!
//! ```text
//! <pid:>6><thread:>6 hex> <YYYY-MM-DD HH:MM:SS.mmm> <LEVEL:>6> <indent>file:line function
//! ```
//!
//! The indent is four spaces per enclosing scope.  Numeric and level fields are
//! right-aligned in six columns.  The prefix ends with a space so the packed
//! payload can be appended directly.

use crate::Level;
use crate::call_site::CallSite;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Spaces per nesting unit.
pub const INDENT_WIDTH: usize = 4;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Builds the header for one line.  Pure: the caller supplies identity and clock.
pub fn format_header(
    pid: u32,
    thread: u64,
    time: &NaiveDateTime,
    level: Level,
    indent: usize,
    site: &CallSite,
) -> String {
    let mut header = String::with_capacity(64 + indent * INDENT_WIDTH);
    // writing into a String cannot fail
    let _ = write!(
        header,
        "{pid:>6}{thread:>6x} {time} {level:>6} {indent:width$}{file}:{line} {function} ",
        time = time.format(TIME_FORMAT),
        level = level.name(),
        indent = "",
        width = indent * INDENT_WIDTH,
        file = site.file,
        line = site.line,
        function = site.function,
    );
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(h, m, s, milli)
            .unwrap()
    }

    #[test]
    fn layout_is_byte_exact() {
        let site = CallSite::new("src/a.rs", "demo::f", 7);
        let header = format_header(42, 0x1f, &at(3, 4, 5, 7), Level::Warning, 2, &site);
        assert_eq!(
            header,
            "    42    1f 2024-01-02 03:04:05.007   WARN         src/a.rs:7 demo::f "
        );
    }

    #[test]
    fn no_indent_at_top_level() {
        let site = CallSite::new("m.rs", "main", 1);
        let header = format_header(1234, 0xabc, &at(23, 59, 59, 999), Level::Error, 0, &site);
        assert_eq!(header, "  1234   abc 2024-01-02 23:59:59.999  ERROR m.rs:1 main ");
    }

    #[test]
    fn milliseconds_are_always_three_digits() {
        let site = CallSite::new("m.rs", "main", 1);
        for (milli, expected) in [(0, ".000 "), (5, ".005 "), (50, ".050 "), (500, ".500 ")] {
            let header = format_header(1, 1, &at(0, 0, 0, milli), Level::Info, 0, &site);
            assert!(header.contains(expected), "{header}");
        }
    }

    #[test]
    fn wide_values_are_not_truncated() {
        let site = CallSite::new("m.rs", "main", 1);
        let header = format_header(4_194_304, 0x1234567, &at(0, 0, 0, 0), Level::Debug, 1, &site);
        assert!(header.starts_with("41943041234567 "));
        assert!(header.contains("  DEBUG     m.rs:1 main "));
    }
}
