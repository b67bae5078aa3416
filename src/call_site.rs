// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

/// Where a log call was made.
///
/// Usually captured with [`callsite!`](crate::callsite), which fills in `file!()`,
/// `line!()` and the path of the enclosing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.function)
    }
}

/// Turns the type name of a marker fn declared inside the caller into the caller's path.
///
/// `type_name` of a fn item `__here` declared in `my_crate::worker::run` is
/// `my_crate::worker::run::__here`; inside a closure it gains `::{{closure}}` segments.
#[doc(hidden)]
pub fn function_path(marker_type_name: &'static str) -> &'static str {
    let name = marker_type_name
        .strip_suffix("::__here")
        .unwrap_or(marker_type_name);
    name.trim_end_matches("::{{closure}}")
}
