//! stategen - build-time adapter for an external state-machine code generator
//!
//! stategen translates a project's resolved dependency graph into a
//! command-line invocation of an external code-generation executable, then
//! supervises that process to completion, surfacing its output and exit status
//! to the enclosing build.
//!
//! # Architecture Overview
//!
//! Two core components, composed sequentially:
//!
//! - [`classpath`] - turns the project's dependency description (ordered
//!   runtime classpath elements plus resolved artifacts) into a single
//!   deduplicated, separator-joined classpath string. Runtime elements keep
//!   their order; artifacts are appended only when not already present.
//! - [`generator`] - builds the generator's fixed-order argument vector
//!   (`-cp` always last), spawns the executable with inherited console I/O,
//!   waits for it to exit, and reports an [`generator::InvocationResult`].
//!
//! The supporting layers:
//!
//! - [`config`] - `stategen.toml` manifest parsing and derived directory
//!   defaults; the only place configuration values come from.
//! - [`cli`] - the `stategen` command-line driver (`generate`, `init`).
//! - [`core`] - error taxonomy and user-facing error rendering.
//! - [`utils`] - platform separator and executable lookup.
//!
//! # Invocation contract
//!
//! ```text
//! <executable> [--debug] -outDirectory <dir> -buildDirectory <dir>
//!   -outResDirectory <dir> -outPackage <pkg> -outClass <name>
//!   -statePackage <pkg> -cp <classpath-string>
//! ```
//!
//! A non-zero exit code from the generator is reported as data, not raised as
//! an error; deciding whether it fails the build belongs to the caller. Only
//! failure to spawn or an interrupted wait abort the invocation without an
//! exit code.
//!
//! # Library Usage
//!
//! The CLI is one driver among many; the core is callable directly:
//!
//! ```rust,no_run
//! use stategen_cli::classpath::{DependencySources, resolve_classpath};
//! use stategen_cli::config::Manifest;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let manifest = Manifest::load(Path::new("stategen.toml"))?;
//! let config = manifest.generator_config(Path::new("."));
//! let sources = manifest.dependency_sources(Path::new("."))?;
//! let classpath = resolve_classpath(&sources);
//! let result = stategen_cli::generator::run(&config, &classpath).await?;
//! println!("generator exited with {:?}", result.exit_code);
//! # Ok(())
//! # }
//! ```

pub mod classpath;
pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod utils;
