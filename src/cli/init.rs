//! Initialize a new stategen project with a manifest file.
//!
//! Creates a starter `stategen.toml` in the target directory. The generated
//! manifest carries the required `[generator]` fields with placeholder values
//! and commented-out optional settings.
//!
//! # Examples
//!
//! ```bash
//! stategen init
//! stategen init --path ./my-project
//! stategen init --force
//! ```

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::config::MANIFEST_NAME;

const MANIFEST_TEMPLATE: &str = r#"# Point at a dependency description emitted by your build (a top-level key,
# so it must stay above the tables) ...
# dependency-description = "target/stategen-deps.toml"

[generator]
executable = "stategen-generator"
package-name = "com.example.generated"
class-name = "StateMachine"
# state-package = "com.example.states"
# debug = false

# Directories default to fixed subpaths of the project root:
# output-directory = "target/generated-sources/stategen"
# build-directory = "target/classes"
# resources-output-directory = "target/generated-sources/stategen-meta"

# ... or list the dependency sources inline:
[dependencies]
runtime-elements = ["target/classes"]
"#;

/// Command to create a starter stategen.toml manifest.
#[derive(Args)]
pub struct InitCommand {
    /// Path to create the manifest in (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Force overwrite if a manifest already exists
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Fails if a manifest already exists and `--force` is not given. Creates
    /// the target directory when missing.
    pub fn execute(self) -> Result<()> {
        let target_dir = match self.path {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let manifest_path = target_dir.join(MANIFEST_NAME);

        if manifest_path.exists() && !self.force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to overwrite)",
                MANIFEST_NAME,
                manifest_path.display()
            ));
        }

        fs::create_dir_all(&target_dir)?;
        fs::write(&manifest_path, MANIFEST_TEMPLATE)?;

        println!("{} created {}", "✓".green(), manifest_path.display());
        println!("  edit the [generator] section, then run {}", "stategen generate".cyan());
        Ok(())
    }
}
