// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sink the leveled macros write to.
//!
//! By default [`error!`](crate::error!), [`warn!`](crate::warn!),
//! [`info!`](crate::info!) and [`debug!`](crate::debug!) write to the process-wide
//! file sink, constructing it on first use.  A host can inject a different sink,
//! for example the console when the log file cannot be opened, or an
//! [`InMemorySink`](crate::InMemorySink) in tests.
//!
//! ```no_run
//! use scopelog::{ConsoleSink, FileSink, set_default_sink};
//! use std::sync::Arc;
//!
//! if let Err(err) = FileSink::global() {
//!     eprintln!("{err}; logging to the console instead");
//!     set_default_sink(Arc::new(ConsoleSink::new()));
//! }
//! ```
//!
//! Only one sink is the default at a time.  Changing it while other threads are
//! logging is safe; calls already in flight finish on the sink they started with.

use crate::error::Result;
use crate::file_sink::{FileSink, process_file_sink};
use crate::sink::Sink;
use std::sync::{Arc, PoisonError, RwLock};

static DEFAULT_SINK: RwLock<Option<Arc<dyn Sink>>> = RwLock::new(None);

/// Routes the leveled macros to `sink`.
pub fn set_default_sink(sink: Arc<dyn Sink>) {
    *DEFAULT_SINK.write().unwrap_or_else(PoisonError::into_inner) = Some(sink);
}

/// Routes the leveled macros back to the process-wide file sink.
pub fn clear_default_sink() {
    *DEFAULT_SINK.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The injected sink, or the process-wide file sink if none was injected.
///
/// Fails only when falling back to the file sink and the log file could not be
/// opened.
pub fn default_sink() -> Result<Arc<dyn Sink>> {
    if let Some(sink) = DEFAULT_SINK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Ok(sink.clone());
    }
    let file: Arc<FileSink> = process_file_sink()?.clone();
    Ok(file)
}

/// Like [`default_sink`], but a configuration error is fatal.
///
/// # Panics
///
/// If no sink was injected and the log file cannot be opened.
#[doc(hidden)]
pub fn default_sink_or_panic() -> Arc<dyn Sink> {
    match default_sink() {
        Ok(sink) => sink,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySink;

    // the only unit test that touches the default sink, so it never falls back to
    // opening log.txt in the working directory
    #[test]
    fn injected_sink_is_returned_until_cleared() {
        let sink = Arc::new(InMemorySink::new());
        set_default_sink(sink.clone());
        let got = default_sink().unwrap();
        assert!(std::ptr::addr_eq(Arc::as_ptr(&got), Arc::as_ptr(&sink)));

        let other = Arc::new(InMemorySink::new());
        set_default_sink(other.clone());
        let got = default_sink_or_panic();
        assert!(std::ptr::addr_eq(Arc::as_ptr(&got), Arc::as_ptr(&other)));

        clear_default_sink();
        assert!(DEFAULT_SINK.read().unwrap().is_none());
    }
}
