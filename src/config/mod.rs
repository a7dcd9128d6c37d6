//! Manifest parsing and configuration for stategen projects.
//!
//! A project configures the generator through a `stategen.toml` manifest at the
//! project root. The manifest names the generator executable and the generated
//! class, and either embeds the dependency sources inline or points at a
//! dependency description emitted by the enclosing build.
//!
//! # Structure
//!
//! ```toml
//! # Either point at a generated description (a top-level key, so it must
//! # appear before the tables) ...
//! dependency-description = "target/stategen-deps.toml"
//!
//! [generator]
//! executable = "stategen-generator"
//! package-name = "com.example.machines"
//! class-name = "TrafficLight"
//! state-package = "com.example.states"   # optional, may be empty
//! debug = false                          # optional
//! # output-directory, build-directory and resources-output-directory are
//! # optional; unset values default to fixed subpaths of the project root.
//!
//! # ... or embed the sources inline:
//! [dependencies]
//! runtime-elements = ["target/classes"]
//! ```
//!
//! Unknown keys are rejected at parse time; a `dependency-description`
//! misplaced inside `[generator]` is an error rather than a silently ignored
//! key that would leave the generator running against an empty classpath.
//!
//! # Derived defaults
//!
//! When unset, the three directories default to fixed subpaths under the
//! project base directory: `target/generated-sources/stategen` for sources,
//! `target/generated-sources/stategen-meta` for resources, and
//! `target/classes` for the build directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::classpath::DependencySources;
use crate::core::StategenError;
use crate::generator::GeneratorConfig;

/// Manifest file name searched for in the project directory tree.
pub const MANIFEST_NAME: &str = "stategen.toml";

/// The `[generator]` section of the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Generator executable: an absolute path or a command name on PATH
    pub executable: PathBuf,

    /// Package name for the generated class
    #[serde(rename = "package-name")]
    pub package_name: String,

    /// Simple name of the generated class
    #[serde(rename = "class-name")]
    pub class_name: String,

    /// Package to scan for state definitions; empty is passed through as-is
    #[serde(rename = "state-package", default)]
    pub state_package: String,

    /// Pass `--debug` to the generator
    #[serde(default)]
    pub debug: bool,

    /// Generated-sources directory; defaults to a fixed subpath of the project root
    #[serde(rename = "output-directory")]
    pub output_directory: Option<PathBuf>,

    /// Compiled-classes directory; defaults to a fixed subpath of the project root
    #[serde(rename = "build-directory")]
    pub build_directory: Option<PathBuf>,

    /// Generated-resources directory; defaults to a fixed subpath of the project root
    #[serde(rename = "resources-output-directory")]
    pub resources_output_directory: Option<PathBuf>,
}

/// A parsed `stategen.toml` manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator invocation settings
    pub generator: GeneratorSection,

    /// Path to a dependency description emitted by the enclosing build;
    /// takes precedence over the inline `[dependencies]` section
    #[serde(rename = "dependency-description")]
    pub dependency_description: Option<PathBuf>,

    /// Inline dependency sources
    #[serde(default)]
    pub dependencies: DependencySources,
}

impl Manifest {
    /// Load and validate a manifest from an explicit path.
    pub fn load(path: &Path) -> Result<Self, StategenError> {
        if !path.exists() {
            return Err(StategenError::ManifestNotFound);
        }

        let content = std::fs::read_to_string(path)?;
        let manifest: Self =
            toml::from_str(&content).map_err(|e| StategenError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject manifests that parse but cannot produce a usable invocation.
    fn validate(&self) -> Result<(), StategenError> {
        if self.generator.executable.as_os_str().is_empty() {
            return Err(StategenError::ManifestValidationError {
                reason: "[generator].executable must not be empty".to_string(),
            });
        }
        if self.generator.package_name.is_empty() {
            return Err(StategenError::ManifestValidationError {
                reason: "[generator].package-name must not be empty".to_string(),
            });
        }
        if self.generator.class_name.is_empty() {
            return Err(StategenError::ManifestValidationError {
                reason: "[generator].class-name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Build the immutable [`GeneratorConfig`] for this project.
    ///
    /// Applies the derived directory defaults and resolves configured relative
    /// directories against the project base directory.
    #[must_use]
    pub fn generator_config(&self, base_dir: &Path) -> GeneratorConfig {
        let dir = |configured: &Option<PathBuf>, default: &str| -> PathBuf {
            match configured {
                Some(p) if p.is_absolute() => p.clone(),
                Some(p) => base_dir.join(p),
                None => base_dir.join(default),
            }
        };

        GeneratorConfig {
            executable: self.generator.executable.clone(),
            output_directory: dir(
                &self.generator.output_directory,
                "target/generated-sources/stategen",
            ),
            build_directory: dir(&self.generator.build_directory, "target/classes"),
            resources_output_directory: dir(
                &self.generator.resources_output_directory,
                "target/generated-sources/stategen-meta",
            ),
            package_name: self.generator.package_name.clone(),
            class_name: self.generator.class_name.clone(),
            state_package: self.generator.state_package.clone(),
            debug: self.generator.debug,
        }
    }

    /// Obtain the dependency sources for this project.
    ///
    /// Loads the configured dependency description when present, otherwise
    /// returns the inline `[dependencies]` section.
    pub fn dependency_sources(&self, base_dir: &Path) -> Result<DependencySources, StategenError> {
        match &self.dependency_description {
            Some(description) => {
                let path = if description.is_absolute() {
                    description.clone()
                } else {
                    base_dir.join(description)
                };
                DependencySources::load(&path)
            }
            None => Ok(self.dependencies.clone()),
        }
    }
}

/// Search for `stategen.toml` starting at `start` and walking up the directory
/// tree, similar to how git searches for `.git`.
pub fn find_manifest_from(start: &Path) -> Result<PathBuf, StategenError> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(MANIFEST_NAME);
        if candidate.exists() {
            return Ok(candidate);
        }
        current = dir.parent();
    }
    Err(StategenError::ManifestNotFound)
}

/// Search for `stategen.toml` from the current working directory upwards.
pub fn find_manifest() -> Result<PathBuf, StategenError> {
    let cwd = std::env::current_dir()?;
    find_manifest_from(&cwd)
}
