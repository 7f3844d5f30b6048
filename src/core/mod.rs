pub mod source;
pub mod status;
pub mod weather;

pub use source::{PlaceholderSource, SourceError, WeatherSource};
pub use status::{Status, StatusProvider, StatusString};
pub use weather::{Condition, Reading};
