//! Process-wide logging operations over standard output.
//!
//! One [`RecordSink`] wraps [`std::io::Stdout`] for the lifetime of the
//! process, guarded by a single lock so the subject and body lines of one
//! call never interleave with another call's. The functions here never
//! return a value and never fail: write errors are absorbed, and a poisoned
//! lock is recovered rather than propagated.

use std::borrow::Cow;
use std::error::Error;
use std::io::{self, Stdout};
use std::sync::{Mutex, OnceLock, PoisonError};

use record::{Record, Severity, Timestamp};

use crate::sink::RecordSink;

static SINK: OnceLock<Mutex<RecordSink<Stdout>>> = OnceLock::new();

/// Renders a record through the shared stdout sink.
///
/// Logging must never fail its caller, so write errors (a closed pipe, a
/// full disk behind a redirection) are discarded here.
pub(crate) fn emit(record: &Record) {
    let sink = SINK.get_or_init(|| Mutex::new(RecordSink::new(io::stdout())));
    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = sink.write(record);
}

/// Logs an error with no body.
///
/// Equivalent to [`error_with`] with a `None` body.
pub fn error<T: Into<Cow<'static, str>>>(message: T) {
    emit(&Record::new(Severity::Error, Timestamp::now(), message));
}

/// Logs an error with a title and an optional body.
///
/// A `None` or whitespace-only body emits the subject line alone.
pub fn error_with<T: Into<Cow<'static, str>>>(title: T, body: Option<&str>) {
    emit(&with_body(Severity::Error, title, body));
}

/// Logs a reported failure as an error.
///
/// The failure's message becomes the title and its diagnostic trace the
/// body. Never fails, whatever the failure looks like.
pub fn error_report(report: &dyn Error) {
    emit(&Record::from_report(Severity::Error, report));
}

/// Logs a warning with no body.
///
/// Equivalent to [`warning_with`] with a `None` body.
pub fn warning<T: Into<Cow<'static, str>>>(message: T) {
    emit(&Record::new(Severity::Warning, Timestamp::now(), message));
}

/// Logs a warning with a title and an optional body.
pub fn warning_with<T: Into<Cow<'static, str>>>(title: T, body: Option<&str>) {
    emit(&with_body(Severity::Warning, title, body));
}

/// Logs a reported failure as a warning.
pub fn warning_report(report: &dyn Error) {
    emit(&Record::from_report(Severity::Warning, report));
}

/// Logs an informational record with no body.
///
/// Equivalent to [`info_with`] with a `None` body.
pub fn info<T: Into<Cow<'static, str>>>(message: T) {
    emit(&Record::new(Severity::Info, Timestamp::now(), message));
}

/// Logs an informational record with a title and an optional body.
pub fn info_with<T: Into<Cow<'static, str>>>(title: T, body: Option<&str>) {
    emit(&with_body(Severity::Info, title, body));
}

/// Logs a reported failure as an informational record.
pub fn info_report(report: &dyn Error) {
    emit(&Record::from_report(Severity::Info, report));
}

fn with_body<T: Into<Cow<'static, str>>>(
    severity: Severity,
    title: T,
    body: Option<&str>,
) -> Record {
    let record = Record::new(severity, Timestamp::now(), title);
    match body {
        Some(body) => record.with_body(body.to_owned()),
        None => record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Output lands on the real stdout here, so these tests exercise the
    // never-fails contract rather than the rendered bytes; the format itself
    // is covered against in-memory sinks in the integration tests.

    #[test]
    fn stdout_operations_do_not_panic() {
        error("stdout test: error");
        warning("stdout test: warning");
        info("stdout test: info");
        error_with("stdout test: title", Some("body"));
        warning_with("stdout test: blank body", Some("   "));
        info_with("stdout test: no body", None);
    }

    #[test]
    fn report_operations_do_not_panic() {
        let failure = std::io::Error::other("stdout test: boom");
        error_report(&failure);
        warning_report(&failure);
        info_report(&failure);
    }

}
