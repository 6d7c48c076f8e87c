//! Bridge between the tracing crate and the stdout writer.
//!
//! [`StdoutLayer`] is a `tracing-subscriber` layer that forwards tracing
//! events to the process-wide stdout sink. Only the three severities this
//! facility defines have a counterpart: `ERROR`, `WARN`, and `INFO` events
//! become records, `DEBUG` and `TRACE` events are ignored.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//!
//! tracing::info!("listening on port 8080");
//! tracing::error!("disk full");
//! ```

use record::{Record, Severity, Timestamp};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::stdout::emit;

/// A tracing layer that forwards events to the stdout writer.
pub struct StdoutLayer;

impl StdoutLayer {
    /// Maps a tracing level to a record severity, if one exists.
    fn level_to_severity(level: Level) -> Option<Severity> {
        if level == Level::ERROR {
            Some(Severity::Error)
        } else if level == Level::WARN {
            Some(Severity::Warning)
        } else if level == Level::INFO {
            Some(Severity::Info)
        } else {
            None
        }
    }
}

impl<S> Layer<S> for StdoutLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(severity) = Self::level_to_severity(*event.metadata().level()) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            emit(&Record::new(severity, Timestamp::now(), message));
        }
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs [`StdoutLayer`] as the global tracing subscriber.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(StdoutLayer).init();
}

/// Installs [`StdoutLayer`] combined with a caller-supplied filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(StdoutLayer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_warn_info_map_to_the_three_severities() {
        assert_eq!(
            StdoutLayer::level_to_severity(Level::ERROR),
            Some(Severity::Error)
        );
        assert_eq!(
            StdoutLayer::level_to_severity(Level::WARN),
            Some(Severity::Warning)
        );
        assert_eq!(
            StdoutLayer::level_to_severity(Level::INFO),
            Some(Severity::Info)
        );
    }

    #[test]
    fn debug_and_trace_have_no_counterpart() {
        assert_eq!(StdoutLayer::level_to_severity(Level::DEBUG), None);
        assert_eq!(StdoutLayer::level_to_severity(Level::TRACE), None);
    }

    #[test]
    fn events_flow_through_a_scoped_subscriber() {
        use tracing_subscriber::layer::SubscriberExt;

        let subscriber = tracing_subscriber::registry().with(StdoutLayer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("bridge test: info event");
            tracing::debug!("bridge test: ignored debug event");
        });
    }
}
