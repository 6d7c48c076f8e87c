use std::borrow::Cow;
use std::error::Error;
use std::io::{self, Write};

use crate::severity::Severity;
use crate::timestamp::Timestamp;
use crate::trace::render_trace;

/// One log record: severity, capture timestamp, title, and optional body.
///
/// Records are transient. Each logging call builds one, renders it, and
/// discards it; nothing holds a record beyond the scope of a single call.
///
/// # Examples
///
/// ```
/// use record::{Record, Severity, Timestamp};
///
/// let record = Record::new(Severity::Error, Timestamp::from_millis(0), "Disk full");
/// assert_eq!(record.subject(), "ERROR:[1970-01-01 00:00:00.000]: Disk full");
/// assert_eq!(record.render_to_string(), "ERROR:[1970-01-01 00:00:00.000]: Disk full\n");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    severity: Severity,
    timestamp: Timestamp,
    title: Cow<'static, str>,
    body: Option<Cow<'static, str>>,
}

impl Record {
    /// Creates a record with an explicit timestamp and no body.
    ///
    /// The severity-specific helpers ([`Record::error`], [`Record::warning`],
    /// [`Record::info`]) read the wall clock themselves; this constructor is
    /// the seam for callers and tests that need a fixed instant.
    #[must_use = "constructed records must be rendered to reach the output stream"]
    pub fn new<T: Into<Cow<'static, str>>>(
        severity: Severity,
        timestamp: Timestamp,
        title: T,
    ) -> Self {
        Self {
            severity,
            timestamp,
            title: title.into(),
            body: None,
        }
    }

    /// Creates an error record stamped with the current wall-clock time.
    #[must_use = "constructed records must be rendered to reach the output stream"]
    pub fn error<T: Into<Cow<'static, str>>>(title: T) -> Self {
        Self::new(Severity::Error, Timestamp::now(), title)
    }

    /// Creates a warning record stamped with the current wall-clock time.
    #[must_use = "constructed records must be rendered to reach the output stream"]
    pub fn warning<T: Into<Cow<'static, str>>>(title: T) -> Self {
        Self::new(Severity::Warning, Timestamp::now(), title)
    }

    /// Creates an info record stamped with the current wall-clock time.
    #[must_use = "constructed records must be rendered to reach the output stream"]
    pub fn info<T: Into<Cow<'static, str>>>(title: T) -> Self {
        Self::new(Severity::Info, Timestamp::now(), title)
    }

    /// Creates a record from a reported failure.
    ///
    /// The failure's `Display` rendering becomes the title and its diagnostic
    /// trace (message plus `caused by:` chain) becomes the body. This never
    /// fails, whatever the failure looks like; see
    /// [`render_trace`](crate::render_trace).
    #[must_use = "constructed records must be rendered to reach the output stream"]
    pub fn from_report(severity: Severity, report: &dyn Error) -> Self {
        Self {
            severity,
            timestamp: Timestamp::now(),
            title: Cow::Owned(report.to_string()),
            body: Some(Cow::Owned(render_trace(report))),
        }
    }

    /// Attaches a body to the record.
    ///
    /// A body that is empty or entirely whitespace is kept as supplied but
    /// suppressed at render time.
    #[must_use = "with_body returns the record rather than mutating in place"]
    pub fn with_body<T: Into<Cow<'static, str>>>(mut self, body: T) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the record's capture timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the record's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body as supplied, if any, including whitespace-only bodies.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the body only when it will actually be rendered.
    fn effective_body(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.trim().is_empty())
    }

    /// Builds the subject line: `<LEVEL>:[<formatted-timestamp>]: <title>`.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("{}:[{}]: {}", self.severity.label(), self.timestamp, self.title)
    }

    /// Renders the record into `writer`.
    ///
    /// Writes the subject line, then, when the body contains at least one
    /// non-whitespace character, the body verbatim followed by one blank
    /// line. A missing or blank body adds nothing after the subject line.
    pub fn render_to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.subject())?;
        if let Some(body) = self.effective_body() {
            writeln!(writer, "{body}")?;
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Renders the record to an owned string, exactly as it would reach the
    /// output stream.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        let mut rendered = self.subject();
        rendered.push('\n');
        if let Some(body) = self.effective_body() {
            rendered.push_str(body);
            rendered.push('\n');
            rendered.push('\n');
        }
        rendered
    }
}
