pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, InitResult};
pub use types::{Config, SourceConfig, SourceKind};
