//! Configuration manager implementation

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, ConfigLoader, LOG_LEVELS},
};

/// Environment prefix; `REGISTRAR__LOGGING__LEVEL=debug` sets `logging.level`
const ENV_PREFIX: &str = "REGISTRAR";

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path this manager reads and writes
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `<config_dir>/registrar/config.toml`, or `./registrar/config.toml` when
    /// the platform has no config directory
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("registrar")
            .join("config.toml")
    }
}

impl ConfigLoader for ConfigManager {
    fn load_config(&mut self) -> Result<AppConfig> {
        debug!(path = %self.config_path.display(), "loading configuration");
        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        debug!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        let mut course_ids = HashSet::new();
        for course in &config.seed.courses {
            if course.credits == 0 {
                return Err(ConfigError::Validation(format!(
                    "Seed course {} must have credits greater than 0",
                    course.id
                )));
            }
            if course.capacity == 0 {
                return Err(ConfigError::Validation(format!(
                    "Seed course {} must have capacity greater than 0",
                    course.id
                )));
            }
            if !course_ids.insert(course.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate seed course ID: {}",
                    course.id
                )));
            }
        }

        let mut student_ids = HashSet::new();
        for student in &config.seed.students {
            if !student_ids.insert(student.id) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate seed student ID: {}",
                    student.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
