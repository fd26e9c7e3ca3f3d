// CLI error types

use registrar_config::ConfigError;
use registrar_core::RegistryError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Input ended")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl CliError {
    /// Invalid input with a message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidInput { message } => format!("Invalid input: {}", message),
            CliError::EndOfInput => "Input ended before the command was complete.".to_string(),
            CliError::Io(e) => format!("I/O failed: {}", e),
            CliError::Config(e) => format!(
                "Configuration error: {}\n\nRun 'registrar config path' to find the configuration file.",
                e
            ),
            CliError::Registry(e) => e.to_string(),
            CliError::Serialize(msg) => format!("Could not serialize output: {}", msg),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialize(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Serialize(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_message_passes_through() {
        let err: CliError = RegistryError::QueueEmpty.into();
        assert_eq!(err.user_message(), "Request queue is empty");
    }

    #[test]
    fn test_config_error_suggests_path_command() {
        let err: CliError = ConfigError::Validation("bad level".to_string()).into();
        assert!(err.user_message().contains("registrar config path"));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = CliError::invalid_input("expected a number, got 'abc'");
        assert_eq!(err.to_string(), "Invalid input: expected a number, got 'abc'");
    }
}
