pub mod cli;
pub mod config;
pub mod core;
pub mod logging;

pub use crate::core::{Status, StatusProvider};
