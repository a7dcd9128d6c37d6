//! Run the external generator for the current project.
//!
//! This is the end-to-end invocation: load the manifest, resolve the
//! classpath from the project's dependency sources, build the generator
//! command line, spawn it with inherited console I/O, and wait for it to
//! exit.
//!
//! The generator's exit code is passed through as this command's own exit
//! code. The orchestrator itself never judges a non-zero exit; propagating it
//! is this caller's policy.
//!
//! # Examples
//!
//! ```bash
//! stategen generate
//! stategen generate --debug
//! stategen generate --dependency-description target/stategen-deps.toml
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::classpath::{self, DependencySources};
use crate::config::{Manifest, find_manifest};
use crate::generator;

/// Command to resolve the classpath and run the external generator.
#[derive(Args)]
pub struct GenerateCommand {
    /// Pass --debug to the generator, regardless of the manifest setting
    #[arg(long)]
    debug: bool,

    /// Override the dependency description path from the manifest
    #[arg(long)]
    dependency_description: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command.
    ///
    /// When `manifest_path` is `None` the manifest is discovered by walking up
    /// from the current directory. The project base directory is the
    /// manifest's parent directory.
    ///
    /// On a spawned-and-exited generator this process exits with the
    /// generator's exit code (1 when the child was killed by a signal and no
    /// code exists). Adapter failures return an error for the top-level
    /// handler to render.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = match manifest_path {
            Some(path) => path,
            None => find_manifest()?,
        };
        let base_dir = manifest_path
            .parent()
            .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);

        let manifest = Manifest::load(&manifest_path)?;
        let mut config = manifest.generator_config(&base_dir);
        if self.debug {
            config.debug = true;
        }

        let sources: DependencySources = match &self.dependency_description {
            Some(path) => DependencySources::load(path)?,
            None => manifest.dependency_sources(&base_dir)?,
        };

        let classpath = classpath::resolve_classpath(&sources);
        let result = generator::run(&config, &classpath).await?;

        match result.exit_code {
            Some(0) => Ok(()),
            Some(code) => {
                // Pass the generator's verdict through unchanged
                std::process::exit(code);
            }
            None => {
                tracing::error!(target: "generator", "generator terminated without an exit code");
                std::process::exit(1);
            }
        }
    }
}
