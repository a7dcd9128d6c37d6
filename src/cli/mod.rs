//! Command-line interface for stategen.
//!
//! The CLI is a thin driver around the library core: any other build
//! integration can call [`crate::classpath`] and [`crate::generator`] directly,
//! the CLI just wires them to a manifest and the process environment.
//!
//! # Available Commands
//!
//! - `generate` - resolve the classpath and run the external generator
//! - `init` - create a starter `stategen.toml` manifest
//!
//! # Global Options
//!
//! - `--verbose` - enable debug output
//! - `--quiet` - suppress all output except errors
//! - `--manifest-path` - explicit path to `stategen.toml`
//!
//! # Example
//!
//! ```bash
//! stategen init
//! stategen generate --verbose
//! stategen --manifest-path ./build/stategen.toml generate
//! ```

mod generate;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global CLI flags.
///
/// Holds configuration that would otherwise be set as environment variables,
/// so tests and programmatic callers can control behavior without touching
/// global state until [`apply_to_env`](Self::apply_to_env) is called.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the `RUST_LOG` environment variable.
    ///
    /// When `None`, the existing `RUST_LOG` value is preserved.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this configuration to the process environment.
    ///
    /// Not thread-safe; call once from the main thread before the tracing
    /// subscriber is installed.
    pub fn apply_to_env(&self) {
        if let Some(ref level) = self.log_level {
            if std::env::var("RUST_LOG").is_err() {
                // SAFETY: called once at startup before any other threads exist
                unsafe { std::env::set_var("RUST_LOG", level) };
            }
        }
    }
}

/// Main CLI structure for stategen.
///
/// Global flags are available to all subcommands; verbosity is translated to
/// a `RUST_LOG` level unless the environment already sets one.
#[derive(Parser)]
#[command(
    name = "stategen",
    about = "Run an external state-machine code generator against the project classpath",
    version
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the manifest file (stategen.toml)
    ///
    /// By default stategen searches the current directory and parent
    /// directories for stategen.toml.
    #[arg(long, global = true)]
    manifest_path: Option<PathBuf>,
}

/// Available subcommands for the stategen CLI.
#[derive(Subcommand)]
enum Commands {
    /// Resolve the project classpath and run the external generator.
    ///
    /// Exits with the generator's own exit code; adapter failures (unreadable
    /// dependency metadata, unrunnable executable) exit with 1.
    Generate(generate::GenerateCommand),

    /// Create a starter stategen.toml manifest.
    Init(init::InitCommand),
}

impl Cli {
    /// Execute the CLI with configuration derived from the parsed arguments.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
        }
    }

    /// Execute the CLI with a specific configuration for dependency injection.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        // Apply configuration to environment once at the start
        config.apply_to_env();
        init_logging();

        match self.command {
            Commands::Generate(cmd) => cmd.execute_with_manifest_path(self.manifest_path).await,
            Commands::Init(cmd) => cmd.execute(),
        }
    }
}

/// Install the global tracing subscriber, honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
fn init_logging() {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
