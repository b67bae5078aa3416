//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# scopelog

scopelog is a small logging library for debug builds.  Every line says who logged it,
when, where, and how deeply nested the call was:

```text
 48213     2 2024-05-04 17:21:09.412   INFO src/main.rs:14 app::load [Hello from load!]
 48213     2 2024-05-04 17:21:09.415  ERROR     src/main.rs:7 app::parse [bad header]
```

The fields are the process id, a per-thread tag in hexadecimal, local time to the
millisecond, the level, an indent of four spaces per enclosing scope, the call site,
and the call's values concatenated inside brackets.

# Levels and thresholds

There are four [`Level`]s: `Error`, `Warning`, `Info` and `Debug`.  Each backend kind
has a process-wide threshold, initially `Info`; a call is written when its level is at
least as urgent as the threshold.  A call that does not pass does nothing at all.
See [`set_system_threshold`].

# Scopes

Logging happens inside a [`Scope`].  A scope bumps the calling thread's nesting
counter while it is alive and gives it back when dropped, whatever way the frame is
left.  Hold a scope across a block to indent everything logged inside it:

```rust
use scopelog::{InMemorySink, Level, Scope, log_to};

let sink = InMemorySink::new();
{
    let _request = Scope::enter(Level::Info, &sink);
    log_to!(&sink, Level::Info, "handling request ", 7);
}
log_to!(&sink, Level::Info, "done");
```

# Sinks

A [`Sink`] is where lines go.  [`ConsoleSink`] writes to stdout, [`FileSink`] appends
to `log.txt` or to the path named by the `LOG_PATH` environment variable, and
[`InMemorySink`] keeps lines for inspection.  Each sink serializes its own writes, so
lines from concurrent threads never interleave.

# The API

```rust,no_run
scopelog::warn!("Hello from main [", 42, ']');
scopelog::info!("loaded ", 3, " files");
```

The leveled macros write to the [default sink](default_sink): the file sink unless
the host injects another with [`set_default_sink`].  They compile to nothing in
release builds.

# Multithreading

Nesting depth is per thread.  Thresholds and sinks are shared by every thread.
*/

mod call_site;
pub mod config;
mod console_sink;
mod error;
mod file_sink;
mod global_sink;
mod header;
mod inmemory_sink;
mod level;
mod log_record;
mod macros;
mod pack;
mod scope;
mod sink;
mod sys;
mod threshold;

pub use call_site::CallSite;
pub use config::{EnvLookup, ProcessEnv};
pub use console_sink::ConsoleSink;
pub use error::{Error, Result};
pub use file_sink::{FileSink, FileSinkCell, process_file_sink_initialized};
pub use global_sink::{clear_default_sink, default_sink, set_default_sink};
pub use header::{INDENT_WIDTH, format_header};
pub use inmemory_sink::InMemorySink;
pub use level::Level;
pub use log_record::LogRecord;
pub use pack::{Packer, pack};
pub use scope::{Scope, nesting_depth};
pub use sink::{Sink, SinkKind};
pub use sys::{process_id, thread_tag};
pub use threshold::{Threshold, set_system_threshold, system_threshold};

#[doc(hidden)]
pub mod hidden {
    pub use crate::call_site::function_path;
    pub use crate::global_sink::default_sink_or_panic;
}
