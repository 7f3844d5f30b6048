use super::source::{PlaceholderSource, WeatherSource};
use super::weather::Reading;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

/// Rendered status text, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusString(String);

impl StatusString {
    /// Render `"{glyph} {temp}°C - {description}"`
    pub fn from_reading(reading: &Reading) -> Self {
        Self(format!(
            "{} {}°C - {}",
            reading.condition.glyph(),
            reading.whole_degrees(),
            reading.condition.description()
        ))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StatusString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a status computation. `NoData` is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready(StatusString),
    NoData,
}

impl Status {
    /// Text handed to the status bar; empty when there is no data
    pub fn into_text(self) -> String {
        match self {
            Self::Ready(text) => text.into_inner(),
            Self::NoData => String::new(),
        }
    }

    /// Write the status line. A failed write, such as a closed pipe, is logged and dropped.
    pub fn emit<W: Write>(self, out: &mut W) {
        let text = self.into_text();
        if let Err(err) = writeln!(out, "{}", text).and_then(|()| out.flush()) {
            tracing::debug!(error = %err, "status line not delivered");
        }
    }
}

/// Produces the weather segment for a status bar.
///
/// Holds no mutable state: every call asks the source afresh.
#[derive(Debug, Clone, Default)]
pub struct StatusProvider<S = PlaceholderSource> {
    source: S,
}

impl StatusProvider<PlaceholderSource> {
    pub fn new() -> Self {
        Self {
            source: PlaceholderSource::new(),
        }
    }
}

impl<S: WeatherSource> StatusProvider<S> {
    pub fn with_source<T: WeatherSource>(self, source: T) -> StatusProvider<T> {
        StatusProvider { source }
    }

    /// Compute the current status. Source errors and panics both yield `NoData`.
    pub fn status(&self) -> Status {
        let source = self.source.name();
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.source.current()));

        match result {
            Ok(Ok(reading)) => {
                tracing::debug!(source, ?reading, "reading received");
                Status::Ready(StatusString::from_reading(&reading))
            }
            Ok(Err(err)) => {
                tracing::debug!(source, error = %err, "no reading available");
                Status::NoData
            }
            Err(_) => {
                tracing::warn!(source, "weather source panicked");
                Status::NoData
            }
        }
    }

    /// Status bar text; never fails, empty when no data is available
    pub fn get_status(&self) -> String {
        self.status().into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::SourceError;
    use crate::core::weather::Condition;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    struct FailingSource;

    impl WeatherSource for FailingSource {
        fn current(&self) -> Result<Reading, SourceError> {
            Err(SourceError::Unavailable("simulated fault".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct PanickingSource;

    impl WeatherSource for PanickingSource {
        fn current(&self) -> Result<Reading, SourceError> {
            panic!("simulated panic")
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    #[test]
    fn test_default_status_is_placeholder_literal() {
        let provider = StatusProvider::new();
        assert_eq!(provider.get_status(), "🌤️ 22°C - Partly Cloudy");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let provider = StatusProvider::new();
        let first = provider.get_status();

        for _ in 0..10 {
            assert_eq!(provider.get_status(), first);
        }
    }

    #[test]
    fn test_source_error_yields_no_data() {
        let provider = StatusProvider::new().with_source(FailingSource);

        assert_eq!(provider.status(), Status::NoData);
        assert_eq!(provider.get_status(), "");
    }

    #[test]
    fn test_source_panic_yields_no_data() {
        let provider = StatusProvider::new().with_source(PanickingSource);

        assert_eq!(provider.status(), Status::NoData);
        assert_eq!(provider.get_status(), "");
    }

    #[test]
    fn test_status_string_from_other_conditions() {
        let reading = Reading::new(Condition::Rain, 8.6);
        let text = StatusString::from_reading(&reading);

        assert_eq!(text.to_string(), "🌧️ 9°C - Rain");
    }

    #[test]
    fn test_no_data_renders_empty() {
        assert_eq!(Status::NoData.into_text(), "");
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut out = Vec::new();
        StatusProvider::new().status().emit(&mut out);

        assert_eq!(String::from_utf8(out).unwrap(), "🌤️ 22°C - Partly Cloudy\n");
    }

    #[test]
    fn test_emit_no_data_writes_empty_line() {
        let mut out = Vec::new();
        Status::NoData.emit(&mut out);

        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_emit_to_closed_pipe_does_not_panic() {
        StatusProvider::new().status().emit(&mut ClosedPipe);
        Status::NoData.emit(&mut ClosedPipe);
    }
}
