// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by scopelog.
//!
//! There is exactly one failure worth reporting: the file sink could not open its
//! log file.  Formatting never fails, and write failures on an already-open sink
//! are deliberately not reported.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file sink's resolved path could not be opened for append.
    ///
    /// This is decided once per process; every later attempt to construct a
    /// file-backed scope observes the same failure without retrying.
    #[error("Could not open log file [{}]: {kind}", path.display())]
    LogFileUnavailable { path: PathBuf, kind: io::ErrorKind },
}

pub type Result<T> = std::result::Result<T, Error>;
