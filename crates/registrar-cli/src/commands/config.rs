// Configuration inspection

use std::io::{self, Write};
use std::path::PathBuf;

use registrar_config::AppConfig;

use super::Command;
use crate::error::CliResult;

/// What to show about the configuration
#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Effective configuration, as TOML
    Show(AppConfig),
    /// Configuration file location
    Path(PathBuf),
}

/// Inspect configuration
pub struct ConfigCommand {
    pub action: ConfigAction,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction) -> Self {
        Self { action }
    }

    /// Render to any writer
    pub fn write_to<W: Write>(&self, out: &mut W) -> CliResult<()> {
        match &self.action {
            ConfigAction::Show(config) => write!(out, "{}", toml::to_string_pretty(config)?)?,
            ConfigAction::Path(path) => writeln!(out, "{}", path.display())?,
        }
        Ok(())
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> CliResult<()> {
        self.write_to(&mut io::stdout().lock())
    }
}
