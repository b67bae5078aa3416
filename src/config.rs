// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration knobs.
//!
//! * The file sink writes to [`DEFAULT_LOG_PATH`] unless the [`LOG_PATH_VAR`] key is
//!   set to a non-empty value when the sink is first constructed.  The lookup goes
//!   through [`EnvLookup`] so hosts and tests can supply their own key/value source;
//!   [`ProcessEnv`] reads the process environment.
//! * [`set_write_hold`] makes every sink hold its write lock for a fixed time before
//!   writing.  This exists only to make lock contention visible when watching output
//!   scroll by.  It defaults to zero and has no effect on correctness: writes are
//!   serialized by the lock whether or not it is held longer.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Log file used when no override is configured, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Environment key that overrides [`DEFAULT_LOG_PATH`].
pub const LOG_PATH_VAR: &str = "LOG_PATH";

/// An opaque key/value lookup service.
///
/// Values are [`OsString`]s: a log path does not have to be valid unicode.
pub trait EnvLookup {
    fn lookup(&self, key: &str) -> Option<OsString>;
}

/// Looks keys up in the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<OsString>,
{
    fn lookup(&self, key: &str) -> Option<OsString> {
        self(key)
    }
}

/// Resolves the file sink's path: the [`LOG_PATH_VAR`] override if present and
/// non-empty, otherwise [`DEFAULT_LOG_PATH`].
pub fn resolve_log_path(env: &dyn EnvLookup) -> PathBuf {
    match env.lookup(LOG_PATH_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_LOG_PATH),
    }
}

static WRITE_HOLD_MICROS: AtomicU64 = AtomicU64::new(0);

/// Sets how long sinks hold their lock before each write.  `Duration::ZERO` disables it.
pub fn set_write_hold(hold: Duration) {
    let micros = u64::try_from(hold.as_micros()).unwrap_or(u64::MAX);
    WRITE_HOLD_MICROS.store(micros, Ordering::Relaxed);
}

pub fn write_hold() -> Duration {
    Duration::from_micros(WRITE_HOLD_MICROS.load(Ordering::Relaxed))
}

/// Sleeps for the configured hold time, if any.  Called with a sink lock held.
pub(crate) fn hold_lock() {
    let hold = write_hold();
    if !hold.is_zero() {
        std::thread::sleep(hold);
    }
}
