//! Integration tests for the failure-report shape of the logging operations.
//!
//! A reported failure contributes its message as the record title and its
//! diagnostic trace as the body.

use std::error::Error;
use std::fmt;

use logging::{Record, RecordSink, Severity, render_trace};

#[derive(Debug)]
struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("boom")
    }
}

impl Error for Boom {}

#[derive(Debug)]
struct WriteFailed {
    cause: Boom,
}

impl fmt::Display for WriteFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("write failed")
    }
}

impl Error for WriteFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

#[test]
fn report_message_becomes_the_title() {
    let record = Record::from_report(Severity::Error, &Boom);
    assert_eq!(record.title(), "boom");
}

#[test]
fn report_trace_becomes_the_body_and_is_terminated_by_a_blank_line() {
    let record = Record::from_report(Severity::Error, &Boom);

    let mut sink = RecordSink::new(Vec::new());
    sink.write(&record).expect("write succeeds");
    let output = String::from_utf8(sink.into_inner()).expect("utf-8");

    let mut lines = output.lines();
    let subject = lines.next().expect("subject line");
    assert!(subject.starts_with("ERROR:["));
    assert!(subject.ends_with("]: boom"));
    assert_eq!(lines.next(), Some("boom"));
    assert!(output.ends_with("\n\n"), "body is followed by a blank line");
}

#[test]
fn chained_failure_renders_every_cause() {
    let failure = WriteFailed { cause: Boom };
    let record = Record::from_report(Severity::Warning, &failure);

    assert_eq!(record.title(), "write failed");
    assert_eq!(record.body(), Some("write failed\ncaused by: boom"));
}

#[test]
fn trace_rendering_matches_the_record_body() {
    let failure = WriteFailed { cause: Boom };
    assert_eq!(
        Record::from_report(Severity::Info, &failure).body(),
        Some(render_trace(&failure).as_str())
    );
}

#[test]
fn report_with_empty_message_yields_an_empty_title_without_panicking() {
    #[derive(Debug)]
    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl Error for Silent {}

    let record = Record::from_report(Severity::Error, &Silent);
    assert_eq!(record.title(), "");
    // The trace is blank too, so the rendered record is the subject alone.
    let rendered = record.render_to_string();
    assert_eq!(rendered.lines().count(), 1);
}
