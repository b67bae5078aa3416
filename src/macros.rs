// SPDX-License-Identifier: MIT OR Apache-2.0

//! The call-site surface.
//!
//! Each macro opens a [`Scope`](crate::Scope) for the duration of the call,
//! captures the call site, and emits its values.  Values are only formatted when
//! the level passes the sink's threshold.
//!
//! Outside debug builds (`debug_assertions` off in the *calling* crate) every
//! macro expands to code that neither evaluates its arguments nor touches any sink.
//!
//! ```rust
//! use scopelog::{InMemorySink, Level, log_to};
//!
//! let sink = InMemorySink::new();
//! log_to!(&sink, Level::Warning, "Hello from main [", 42, ']');
//! # #[cfg(debug_assertions)]
//! assert!(sink.drain_logs().ends_with("[Hello from main [42]]"));
//! ```

/// Captures the current [`CallSite`](crate::CallSite): `file!()`, `line!()` and
/// the path of the enclosing function.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(
            ::core::file!(),
            {
                fn __here() {}
                fn __type_name_of<T>(_: T) -> &'static str {
                    ::core::any::type_name::<T>()
                }
                $crate::hidden::function_path(__type_name_of(__here))
            },
            ::core::line!(),
        )
    };
}

/// Logs `values` at `level` to an explicit sink.
///
/// `sink` is any expression that coerces to `&dyn Sink`.
///
/// ```rust
/// use scopelog::{InMemorySink, Level};
/// let sink = InMemorySink::new();
/// scopelog::log_to!(&sink, Level::Info, "loaded ", 3, " entries");
/// ```
#[macro_export]
macro_rules! log_to {
    ($sink:expr, $level:expr $(, $value:expr)* $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            let __scope = $crate::Scope::enter($level, $sink);
            if __scope.enabled() {
                __scope.emit(
                    &$crate::callsite!(),
                    &[$(&$value as &dyn ::core::fmt::Display),*],
                );
            }
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = || {
                let _ = &$sink;
                let _ = &$level;
                $(let _ = &$value;)*
            };
        }
    }};
}

/// Logs `values` at `level` to the [default sink](crate::default_sink).
///
/// # Panics
///
/// If no sink was injected and the log file cannot be opened.  Use
/// [`Scope::file`](crate::Scope::file) to handle that case instead.
#[macro_export]
macro_rules! log {
    ($level:expr $(, $value:expr)* $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            let __sink = $crate::hidden::default_sink_or_panic();
            $crate::log_to!(&*__sink, $level $(, $value)*);
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = || {
                let _ = &$level;
                $(let _ = &$value;)*
            };
        }
    }};
}

/// Logs at [`Level::Error`](crate::Level::Error) to the default sink.
#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Level::Error $(, $value)*)
    };
}

/// Logs at [`Level::Warning`](crate::Level::Warning) to the default sink.
#[macro_export]
macro_rules! warn {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Level::Warning $(, $value)*)
    };
}

/// Logs at [`Level::Info`](crate::Level::Info) to the default sink.
#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Level::Info $(, $value)*)
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug) to the default sink.
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Level::Debug $(, $value)*)
    };
}
