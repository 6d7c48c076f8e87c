use std::borrow::Borrow;
use std::io::{self, Write};

use record::Record;

/// Streaming sink that renders [`Record`] values into an [`io::Write`] target.
///
/// The sink owns the underlying writer and renders each record in the fixed
/// two-line shape: subject line, then body plus blank line when the body is
/// non-blank. It keeps no other state, making it inexpensive to move or
/// rebuild when logging contexts change.
///
/// # Examples
///
/// Collect records into a [`Vec<u8>`]:
///
/// ```
/// use logging::RecordSink;
/// use record::{Record, Severity, Timestamp};
///
/// let mut sink = RecordSink::new(Vec::new());
/// sink.write(&Record::new(Severity::Error, Timestamp::from_millis(0), "Disk full"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "ERROR:[1970-01-01 00:00:00.000]: Disk full\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RecordSink<W> {
    writer: W,
}

impl<W> RecordSink<W> {
    /// Creates a sink over the provided writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for RecordSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Writes a single record to the underlying writer.
    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        record.render_to_writer(&mut self.writer)
    }

    /// Writes each record from the iterator to the underlying writer.
    ///
    /// The iterator may yield borrowed or owned [`Record`] values, so callers
    /// batching diagnostics in a [`Vec<Record>`] or an array need not
    /// materialise intermediate references.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::RecordSink;
    /// use record::{Record, Severity, Timestamp};
    ///
    /// let mut sink = RecordSink::new(Vec::new());
    /// let records = [
    ///     Record::new(Severity::Info, Timestamp::from_millis(0), "phase one"),
    ///     Record::new(Severity::Warning, Timestamp::from_millis(0), "phase two"),
    /// ];
    ///
    /// sink.write_all(records.iter())?;
    /// let output = String::from_utf8(sink.into_inner()).unwrap();
    /// assert_eq!(output.lines().count(), 2);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_all<I, R>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = R>,
        R: Borrow<Record>,
    {
        for record in records {
            self.write(record.borrow())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
