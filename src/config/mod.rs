//! Config module - controller tuning loaded from RON.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{ControllerConfig, DEFAULT_CONFIG_PATH};
