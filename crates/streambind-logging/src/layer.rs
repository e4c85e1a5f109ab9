//! Subscriber setup and the warning capture layer

use crate::capture::{CapturedEvent, WarningLog};
use crate::reload::{ReloadHandle, level_filter};
use streambind_core::LogLevel;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding per-target filter directives
pub const LOG_ENV_VAR: &str = "STREAMBIND_LOG";

/// Tracing layer that records warning and error events
pub struct WarningCaptureLayer {
    log: &'static WarningLog,
}

impl WarningCaptureLayer {
    /// Create a layer recording into the global warning log
    pub fn new() -> Self {
        Self {
            log: WarningLog::global(),
        }
    }

    /// Create a layer with a specific warning log
    pub fn with_log(log: &'static WarningLog) -> Self {
        Self { log }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for WarningCaptureLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for WarningCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());
        if level < LogLevel::Warn {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.log.record(CapturedEvent {
            level,
            target: metadata.target().to_string(),
            message: visitor.finish(),
        });
    }
}

/// Collects the message and any structured fields of an event
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let mut parts: Vec<String> = self.message.into_iter().collect();
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Install the global subscriber.
///
/// Events at or above `level` go to stderr. [`LOG_ENV_VAR`] may narrow
/// output further with `EnvFilter` directives. Warnings and errors are
/// recorded in [`WarningLog::global`] whatever the level. Returns `false`
/// when a subscriber was already set.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::filter::FilterExt;
    use tracing_subscriber::prelude::*;

    let (filter, handle) = tracing_subscriber::reload::Layer::new(level_filter(level));
    let directives =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("trace"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter.and(directives));

    let installed = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(WarningCaptureLayer::new())
        .try_init()
        .is_ok();

    if installed {
        ReloadHandle::global().set_handle(handle);
    }
    installed
}
