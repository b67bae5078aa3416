// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::threshold::Threshold;
use std::fmt::Debug;

/// The two families of backend.
///
/// Each kind has its own system threshold and its own per-thread nesting counter,
/// so console logging and file logging indent independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
}

impl SinkKind {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            SinkKind::Console => 0,
            SinkKind::File => 1,
        }
    }
}

/// A destination for log lines.
pub trait Sink: Debug + Send + Sync {
    /**
    Which nesting counter scopes on this sink use.
    */
    fn kind(&self) -> SinkKind;

    /**
    The threshold calls are filtered against.  Built-in sinks return the system
    threshold of their kind.
    */
    fn threshold(&self) -> &Threshold;

    /**
    Writes the record as one newline-terminated unit.

    Implementations must serialize concurrent calls so that two records never
    interleave.  Only called for records that passed [`Self::threshold`].
    */
    fn finish_log_record(&self, record: LogRecord);
}

/*
Boilerplate notes.

# Sink

Clone makes no sense on the trait; concrete sinks decide.
PartialEq and Eq are possible but it's a little unclear if we mean data equality or provenance.  Avoid.
Default is not sensible since who knows how the sink is constructed (does it need a path, etc.)
Send/Sync are required: a sink is shared by every thread that logs.
*/
