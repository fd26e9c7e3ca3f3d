//! Registrar configuration
//!
//! Loads [`AppConfig`] from an optional TOML file layered under `REGISTRAR__*`
//! environment variables, validates it, and carries the seed data the
//! registry starts with.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AppConfig, LoggingConfig, SeedConfig, SeedCourse, SeedStudent, ShellConfig};
