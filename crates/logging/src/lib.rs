#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` writes two-line log records to the process's standard output.
//! It exposes one operation per severity level (`error`, `warning`, `info`),
//! each in three shapes: a plain message, an explicit title/body pair, and a
//! reported failure whose message and diagnostic trace become title and
//! body. The record model itself lives in the [`record`] crate and is
//! re-exported here.
//!
//! # Design
//!
//! [`RecordSink`] is a lightweight wrapper around an [`std::io::Write`]
//! implementor that renders [`Record`] values. The process-wide functions
//! share one sink over [`std::io::Stdout`] behind a single lock, so the
//! subject and body of one call never interleave with another call's lines.
//! Every call reads the wall clock independently, builds its record, writes
//! it, and returns; there is no queue, no background worker, and no state
//! carried between calls.
//!
//! # Errors
//!
//! [`RecordSink`] surfaces [`std::io::Error`] values from the underlying
//! writer. The process-wide `error`/`warning`/`info` functions absorb them:
//! logging is defined to never be a source of failure for its caller.
//!
//! # Examples
//!
//! Stream records into an in-memory buffer and inspect the output:
//!
//! ```
//! use logging::{Record, RecordSink, Severity, Timestamp};
//!
//! let mut sink = RecordSink::new(Vec::new());
//! let startup = Record::new(Severity::Info, Timestamp::from_millis(0), "Startup")
//!     .with_body("Listening on port 8080");
//! sink.write(&startup).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "INFO:[1970-01-01 00:00:00.000]: Startup\nListening on port 8080\n\n"
//! );
//! ```
//!
//! Log straight to standard output:
//!
//! ```no_run
//! logging::info("Startup");
//! logging::warning_with("Retry", Some("attempt 2 of 5"));
//! ```

#[cfg(feature = "tracing")]
mod bridge;
mod sink;
mod stdout;

pub use record::{ParseSeverityError, Record, Severity, Timestamp, render_trace};

#[cfg(feature = "tracing")]
pub use bridge::{StdoutLayer, init_tracing, init_tracing_with_filter};
pub use sink::RecordSink;
pub use stdout::{
    error, error_report, error_with, info, info_report, info_with, warning, warning_report,
    warning_with,
};
