#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `record` models the single transient entity of the two-line logging
//! facility: a [`Record`] combining a [`Severity`], a capture [`Timestamp`],
//! a title, and an optional body. Records are built per call, rendered, and
//! discarded; nothing in this crate stores or mutates them afterwards.
//!
//! # Design
//!
//! A record renders as a subject line of the form
//! `<LEVEL>:[<yyyy-MM-dd HH:mm:ss.SSS>]: <title>` followed, when the body
//! contains at least one non-whitespace character, by the body verbatim and
//! one blank line. Timestamps are captured from the wall clock at
//! construction time so every record carries the instant of its own call,
//! never a shared or deferred reading.
//!
//! # Invariants
//!
//! - The severity label is always exactly one of `ERROR`, `WARNING`, `INFO`.
//! - A whitespace-only body renders nothing after the subject line, not even
//!   the trailing blank line.
//! - Rendering a diagnostic trace never fails: internal formatting errors
//!   are replaced by a placeholder string embedding their message.
//!
//! # Errors
//!
//! [`Record::render_to_writer`] surfaces [`std::io::Error`] values from the
//! underlying writer unchanged. Everything else in this crate is infallible.
//!
//! # Examples
//!
//! ```
//! use record::{Record, Severity, Timestamp};
//!
//! let record = Record::new(Severity::Info, Timestamp::from_millis(0), "Startup")
//!     .with_body("Listening on port 8080");
//!
//! let rendered = record.render_to_string();
//! assert_eq!(
//!     rendered,
//!     "INFO:[1970-01-01 00:00:00.000]: Startup\nListening on port 8080\n\n"
//! );
//! ```

mod record;
mod severity;
mod timestamp;
mod trace;

pub use record::Record;
pub use severity::{ParseSeverityError, Severity};
pub use timestamp::Timestamp;
pub use trace::render_trace;
