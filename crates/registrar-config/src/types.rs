//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Interactive shell configuration
    pub shell: ShellConfig,
    /// Startup seed data
    pub seed: SeedConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to stderr
    pub level: String,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Colour output when stdout is a terminal
    pub colors: bool,
    /// Print the title banner above the menu
    pub show_banner: bool,
}

/// Records loaded into the registry before the shell starts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Whether to seed at all
    pub enabled: bool,
    /// Courses, added in order
    pub courses: Vec<SeedCourse>,
    /// Students, added in order
    pub students: Vec<SeedStudent>,
}

/// A seed course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedCourse {
    /// Course ID
    pub id: String,
    /// Course title
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Seat limit
    pub capacity: u32,
}

/// A seed student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedStudent {
    /// Student ID
    pub id: i64,
    /// Display name
    pub name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            colors: true,
            show_banner: true,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            courses: vec![
                SeedCourse {
                    id: "CS101".to_string(),
                    name: "Introduction to CS".to_string(),
                    credits: 3,
                    capacity: 5,
                },
                SeedCourse {
                    id: "CS102".to_string(),
                    name: "Data Structures".to_string(),
                    credits: 4,
                    capacity: 1,
                },
            ],
            students: vec![
                SeedStudent {
                    id: 2023001,
                    name: "Ali".to_string(),
                },
                SeedStudent {
                    id: 2023002,
                    name: "Sara".to_string(),
                },
            ],
        }
    }
}

/// Configuration loading seam
pub trait ConfigLoader {
    /// Load configuration
    fn load_config(&mut self) -> Result<AppConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
}
