/// Sky condition shown in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    Clear,
    #[default]
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl Condition {
    /// Emoji glyph rendered in front of the temperature
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "🌤️",
            Self::Cloudy => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// A single observation handed from a source to the status formatter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub condition: Condition,
    pub celsius: f64,
}

impl Reading {
    pub fn new(condition: Condition, celsius: f64) -> Self {
        Self { condition, celsius }
    }

    /// Temperature rounded to a whole degree Celsius
    pub fn whole_degrees(&self) -> i64 {
        self.celsius.round() as i64
    }
}
