//! stategen CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The commands:
//! - `generate` - resolve the project classpath and run the external generator
//! - `init` - create a starter stategen.toml manifest

use anyhow::Result;
use clap::Parser;
use stategen_cli::cli;
use stategen_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
