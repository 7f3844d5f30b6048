use super::weather::{Condition, Reading};
use thiserror::Error;

/// Fault raised while producing a reading
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("weather source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can hand the status provider a current reading
pub trait WeatherSource {
    fn current(&self) -> Result<Reading, SourceError>;

    fn name(&self) -> &'static str;
}

/// Fixed reading used until a live source exists.
/// Performs no network, file or environment access.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSource;

impl PlaceholderSource {
    pub const READING: Reading = Reading {
        condition: Condition::PartlyCloudy,
        celsius: 22.0,
    };

    pub fn new() -> Self {
        Self
    }
}

impl WeatherSource for PlaceholderSource {
    fn current(&self) -> Result<Reading, SourceError> {
        Ok(Self::READING)
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_reading_is_fixed() {
        let source = PlaceholderSource::new();
        let reading = source.current().unwrap();

        assert_eq!(reading.condition, Condition::PartlyCloudy);
        assert_eq!(reading.celsius, 22.0);
        assert_eq!(source.current().unwrap(), reading);
    }

    #[test]
    fn test_source_error_message() {
        let err = SourceError::Unavailable("timeout".to_string());
        assert_eq!(err.to_string(), "weather source unavailable: timeout");
    }
}
