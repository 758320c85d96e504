use std::fmt::{self, Display};

use log::{Level, LevelFilter};
use utils_logging::utils_debug;

/// Log target used by [`LogFacadeSink`].
pub const CONSOLE_TARGET: &str = "console";

/// A place human-readable diagnostics can be written to.
pub trait DiagnosticSink: Send + Sync {
    fn write(&self, value: &dyn Display);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write(&self, value: &dyn Display) {
        self(&value.to_string());
    }
}

/// Forwards values to the global `log` facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFacadeSink {
    pub level: Level,
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self { level: Level::Info }
    }
}

impl DiagnosticSink for LogFacadeSink {
    fn write(&self, value: &dyn Display) {
        log::log!(target: CONSOLE_TARGET, self.level, "{value}");
    }
}

/// Console wrapper whose sink may be absent. Logging without a sink is a no-op.
#[derive(Default)]
pub struct Console {
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl Console {
    pub fn new(sink: Option<Box<dyn DiagnosticSink>>) -> Self {
        Self { sink }
    }

    /// Console with no sink; every `log` call is dropped.
    pub fn detached() -> Self {
        Self { sink: None }
    }

    pub fn with_sink(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    /// Uses the `log` facade when a global logger is installed and enabled.
    pub fn from_environment() -> Self {
        if log::max_level() == LevelFilter::Off {
            Self::detached()
        } else {
            utils_debug!("console attached to the log facade");
            Self::with_sink(LogFacadeSink::default())
        }
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log<T: Display + ?Sized>(&self, value: &T) {
        log(self.sink.as_deref(), value);
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("has_sink", &self.has_sink())
            .finish()
    }
}

/// Writes `value` to `sink` unchanged, or does nothing when there is no sink.
pub fn log<T: Display + ?Sized>(sink: Option<&dyn DiagnosticSink>, value: &T) {
    if let Some(sink) = sink {
        sink.write(&value);
    }
}
