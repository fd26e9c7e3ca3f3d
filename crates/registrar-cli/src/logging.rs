// Logging and verbosity control

use tracing::{debug, Level};

/// Verbosity levels selected by command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - the configured level
    Normal,
    /// Verbose mode - debug output
    Verbose,
}

impl VerbosityLevel {
    /// Resolve the `--verbose` / `--quiet` flags; quiet wins
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Maximum tracing level for this verbosity. Normal mode defers to the
    /// configured level name, falling back to `warn` if it does not parse.
    pub fn max_level(self, configured: &str) -> Level {
        match self {
            VerbosityLevel::Quiet => Level::ERROR,
            VerbosityLevel::Verbose => Level::DEBUG,
            VerbosityLevel::Normal => configured.parse().unwrap_or(Level::WARN),
        }
    }
}

/// Install the global stderr subscriber and return the level it filters at
pub fn init_logging(verbose: bool, quiet: bool, configured: &str) -> Level {
    let level = VerbosityLevel::from_flags(verbose, quiet).max_level(configured);

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        debug!("global subscriber already installed");
    }
    level
}
