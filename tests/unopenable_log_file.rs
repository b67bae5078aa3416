// SPDX-License-Identifier: MIT OR Apache-2.0

//! An unopenable log file is a configuration error: `Scope::file` reports it, the
//! leveled macros treat it as fatal, and the host can fall back to the console.

use scopelog::{ConsoleSink, Error, Level, Scope, SinkKind, nesting_depth, set_default_sink};
use std::sync::Arc;

#[test]
fn missing_directory_fails_construction_and_host_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("log.txt");
    // SAFETY: no other thread in this test binary reads the environment yet
    unsafe { std::env::set_var("LOG_PATH", &path) };

    match Scope::file(Level::Error) {
        Err(Error::LogFileUnavailable { path: failed, .. }) => assert_eq!(failed, path),
        Ok(_) => panic!("the log directory does not exist"),
    }
    assert_eq!(nesting_depth(SinkKind::File), 0);

    // creating the directory now does not help: the open is never retried
    std::fs::create_dir(dir.path().join("missing")).unwrap();
    let err = Scope::file(Level::Error).unwrap_err();
    assert!(err.to_string().contains(&path.display().to_string()));

    let fatal = std::panic::catch_unwind(|| {
        scopelog::error!("this cannot be written");
    });
    assert!(fatal.is_err());
    assert!(!path.exists());

    set_default_sink(Arc::new(ConsoleSink::new()));
    scopelog::warn!("falling back to the console");
}
