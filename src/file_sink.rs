// SPDX-License-Identifier: MIT OR Apache-2.0

//! The append-only file sink.
//!
//! # Initialization
//!
//! The first construction in the process resolves the path (the `LOG_PATH` override
//! or `log.txt`, see [`config`](crate::config)), announces it on stdout, and opens
//! the file for append, creating it if needed.  This happens exactly once, however
//! many threads race to construct the sink first; everyone else waits for the
//! winner and then observes its result.
//!
//! If the open failed, every construction for the rest of the process returns
//! [`Error::LogFileUnavailable`] naming the resolved path.  Nothing is retried.
//!
//! # Writing
//!
//! Each line is written with one `write_all` under the sink's own lock.  That lock
//! is independent of the console lock.
//!
//! The process-wide sink lives in a static [`FileSinkCell`].  Hosts that need a
//! second, independently initialized file sink can own a cell of their own.

use crate::config::{EnvLookup, ProcessEnv, hold_lock, resolve_log_path};
use crate::console_sink::write_console;
use crate::error::{Error, Result};
use crate::log_record::LogRecord;
use crate::sink::{Sink, SinkKind};
use crate::threshold::{Threshold, system_threshold_cell};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// A file sink's one-time state: the resolved path and the open handle, or why
/// the open failed.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: std::result::Result<Mutex<File>, io::ErrorKind>,
}

impl FileSink {
    fn initialize(env: &dyn EnvLookup) -> Self {
        let path = resolve_log_path(env);
        write_console(&format!("The log file path is: {}\n", path.display()));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map(Mutex::new)
            .map_err(|e| e.kind());
        Self { path, file }
    }

    /// The process-wide file sink, initializing it on first use from the process
    /// environment.
    pub fn global() -> Result<&'static FileSink> {
        process_file_sink().map(|sink| &**sink)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn threshold(&self) -> &Threshold {
        system_threshold_cell(SinkKind::File)
    }

    fn finish_log_record(&self, record: LogRecord) {
        // cells only hand out sinks whose open succeeded
        if let Ok(file) = &self.file {
            let line = record.to_line();
            let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
            hold_lock();
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/**
A lazily initialized file sink.

```no_run
use scopelog::{FileSinkCell, ProcessEnv};

static AUDIT: FileSinkCell = FileSinkCell::new();

let sink = AUDIT.sink(&ProcessEnv)?;
println!("logging to {}", sink.path().display());
# Ok::<(), scopelog::Error>(())
```
*/
#[derive(Debug)]
pub struct FileSinkCell {
    state: OnceLock<Arc<FileSink>>,
}

static PROCESS_FILE_SINK: FileSinkCell = FileSinkCell::new();

impl FileSinkCell {
    pub const fn new() -> Self {
        Self {
            state: OnceLock::new(),
        }
    }

    /// Returns the sink, initializing the cell with `env` if this is the first call.
    ///
    /// `env` is ignored once the cell is initialized.
    pub fn sink(&self, env: &dyn EnvLookup) -> Result<&Arc<FileSink>> {
        let sink = self
            .state
            .get_or_init(|| Arc::new(FileSink::initialize(env)));
        match &sink.file {
            Ok(_) => Ok(sink),
            Err(kind) => Err(Error::LogFileUnavailable {
                path: sink.path.clone(),
                kind: *kind,
            }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// The resolved path, once initialized.  Available even if the open failed.
    pub fn path(&self) -> Option<&Path> {
        self.state.get().map(|sink| sink.path())
    }
}

impl Default for FileSinkCell {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn process_file_sink() -> Result<&'static Arc<FileSink>> {
    PROCESS_FILE_SINK.sink(&ProcessEnv)
}

/// Whether the process-wide file sink has been initialized yet.
pub fn process_file_sink_initialized() -> bool {
    PROCESS_FILE_SINK.is_initialized()
}
