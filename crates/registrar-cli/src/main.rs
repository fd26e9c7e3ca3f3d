// Registrar CLI entry point

use anyhow::Context;
use registrar_cli::{output, router::CommandRouter};

fn main() {
    if let Err(e) = run() {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    CommandRouter::route()
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("registrar failed")
}
