use std::error::Error;
use std::fmt::Write as _;

/// Placeholder used when assembling a trace fails internally.
const TRACE_FALLBACK: &str = "could not render diagnostic trace";

/// Renders a failure's diagnostic trace as human-readable text.
///
/// The trace starts with the failure's own message and walks the
/// [`Error::source`] chain, one `caused by:` line per link. Rendering is
/// failure-tolerant: if assembling the text fails, the result is a fixed
/// placeholder embedding the internal error's message rather than a
/// propagated error, so logging a failure can itself never fail.
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct DiskFull;
///
/// impl fmt::Display for DiskFull {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("disk full")
///     }
/// }
///
/// impl std::error::Error for DiskFull {}
///
/// assert_eq!(record::render_trace(&DiskFull), "disk full");
/// ```
#[must_use]
pub fn render_trace(report: &dyn Error) -> String {
    match try_render(report) {
        Ok(trace) => trace,
        Err(error) => format!("{TRACE_FALLBACK}: {error}"),
    }
}

fn try_render(report: &dyn Error) -> Result<String, std::fmt::Error> {
    let mut trace = String::new();
    write!(trace, "{report}")?;
    let mut source = report.source();
    while let Some(cause) = source {
        write!(trace, "\ncaused by: {cause}")?;
        source = cause.source();
    }
    Ok(trace)
}
