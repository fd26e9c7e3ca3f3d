// Interactive menu session

use std::io;

use registrar_config::AppConfig;
use tracing::debug;

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;
use crate::seed::build_registry;
use crate::shell::Shell;

/// Run the interactive menu on stdin/stdout
pub struct ShellCommand {
    config: AppConfig,
    no_seed: bool,
}

impl ShellCommand {
    pub fn new(config: AppConfig, no_seed: bool) -> Self {
        Self { config, no_seed }
    }
}

impl Command for ShellCommand {
    fn execute(&self) -> CliResult<()> {
        let registry = build_registry(&self.config, self.no_seed)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut shell = Shell::new(registry, stdin.lock(), stdout.lock())
            .with_style(OutputStyle::for_terminal(self.config.shell.colors))
            .with_banner(self.config.shell.show_banner);

        let summary = shell.run()?;
        debug!(?summary, "shell session ended");
        Ok(())
    }
}
