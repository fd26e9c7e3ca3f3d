// Command handlers for the registrar CLI

pub mod catalog;
pub mod config;
pub mod shell;

pub use catalog::CatalogCommand;
pub use config::{ConfigAction, ConfigCommand};
pub use shell::ShellCommand;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}
