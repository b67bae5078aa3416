// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process and thread identity, and the local wall clock.
//!
//! `std::thread::ThreadId` has no stable numeric form, so each thread is given a
//! small process-unique tag the first time it logs.  The tag is what the header
//! prints in hexadecimal.

use chrono::{Local, NaiveDateTime};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_TAG: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_TAG: u64 = NEXT_THREAD_TAG.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn process_id() -> u32 {
    std::process::id()
}

/// The calling thread's tag.  Stable for the life of the thread, never reused.
#[inline]
pub fn thread_tag() -> u64 {
    THREAD_TAG.with(|tag| *tag)
}

/// Current wall-clock time in the local timezone.
#[inline]
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
