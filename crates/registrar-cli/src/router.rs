// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use registrar_config::{types::ConfigLoader, AppConfig, ConfigManager};
use tracing::debug;

use crate::commands::*;
use crate::error::CliResult;

/// Registrar - in-memory academic records
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(bin_name = "registrar")]
#[command(about = "Interactive registry for students, courses, enrollments and grades")]
#[command(
    long_about = "Registrar keeps students, courses, enrollments, waitlists and grades in memory for the length of one session.\n\nRun without a command to open the interactive menu."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: <config dir>/registrar/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty registry instead of the configured seed data
    #[arg(long, global = true)]
    pub no_seed: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive menu
    #[command(about = "Open the interactive menu (default)")]
    Shell,

    /// Print the seeded course catalog
    #[command(about = "Print the seeded course catalog and exit")]
    Catalog {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    #[command(about = "Inspect registrar configuration")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigSubcommand>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    #[command(about = "Show the effective configuration as TOML")]
    Show,

    /// Show the configuration file location
    #[command(about = "Show the configuration file location")]
    Path,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();
        Self::execute(&cli)
    }

    /// Load configuration, initialise logging and run a command
    pub fn execute(cli: &Cli) -> CliResult<()> {
        let mut manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        let config = manager.load_config()?;

        let level = crate::logging::init_logging(cli.verbose, cli.quiet, &config.logging.level);
        debug!(%level, path = %manager.config_path().display(), "configuration loaded");

        Self::command_for(cli, config, &manager).execute()
    }

    /// Build the handler for the parsed command; no command means the shell
    pub fn command_for(cli: &Cli, config: AppConfig, manager: &ConfigManager) -> Box<dyn Command> {
        match cli.command.clone().unwrap_or(Commands::Shell) {
            Commands::Shell => Box::new(ShellCommand::new(config, cli.no_seed)),
            Commands::Catalog { json } => {
                Box::new(CatalogCommand::new(config, cli.no_seed, json))
            }
            Commands::Config { action } => {
                let action = match action {
                    Some(ConfigSubcommand::Show) | None => ConfigAction::Show(config),
                    Some(ConfigSubcommand::Path) => {
                        ConfigAction::Path(manager.config_path().to_path_buf())
                    }
                };
                Box::new(ConfigCommand::new(action))
            }
        }
    }
}
