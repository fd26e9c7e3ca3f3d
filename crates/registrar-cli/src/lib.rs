//! Command-line front end for the registrar record engine
//!
//! Parses arguments, loads configuration, initialises logging and runs either
//! the interactive menu [`shell::Shell`] or a one-shot command.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;
pub mod seed;
pub mod shell;

pub use error::{CliError, CliResult};
pub use logging::{init_logging, VerbosityLevel};
pub use output::OutputStyle;
pub use router::{Cli, CommandRouter, Commands};
pub use seed::{build_registry, seed_registry, SeedSummary};
pub use shell::{MenuChoice, Shell};
