//! Classpath resolution for the generator invocation.
//!
//! The generator is handed the project classpath as a single `-cp` argument.
//! That classpath is assembled from two overlapping sources:
//!
//! - **Runtime classpath elements**: an ordered list of paths contributed by the
//!   build's own output directories and direct dependency resolution. May
//!   contain duplicates and plain directories; no existence check is performed.
//! - **Resolved artifacts**: packaged dependencies, each resolvable to a file on
//!   disk. An artifact that did not resolve to a file is skipped, not an error.
//!
//! The resolver guarantees each distinct path appears exactly once, with runtime
//! elements keeping their input order and artifacts appended only when not
//! already present. Deduplication uses lexical path normalization (see
//! [`crate::utils::normalize_path`]); the filesystem is never consulted.
//!
//! # Examples
//!
//! ```rust
//! use stategen_cli::classpath::{Artifact, DependencySources, resolve_elements, join_classpath};
//!
//! let sources = DependencySources {
//!     runtime_elements: vec!["/a/out".to_string(), "/b/lib1.jar".to_string()],
//!     artifacts: vec![
//!         Artifact::resolved("/b/lib1.jar"),
//!         Artifact::resolved("/c/lib2.jar"),
//!     ],
//! };
//!
//! let elements = resolve_elements(&sources);
//! assert_eq!(join_classpath(&elements, ';'), "/a/out;/b/lib1.jar;/c/lib2.jar");
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::StategenError;
use crate::utils::{classpath_separator, normalize_path};

/// One resolved dependency artifact.
///
/// Identity for deduplication is the resolved file path, not any symbolic
/// coordinate. `file` is `None` when the build's dependency resolution did not
/// produce a file for this artifact; such artifacts are skipped silently.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    /// The file this artifact resolved to, if any
    pub file: Option<PathBuf>,
}

impl Artifact {
    /// An artifact that resolved to a file on disk.
    pub fn resolved(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
        }
    }

    /// An artifact whose file could not be resolved.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self {
            file: None,
        }
    }
}

/// The two dependency sources the classpath is built from.
///
/// Typically loaded from a dependency description emitted by the enclosing
/// build (see [`DependencySources::load`]), but may also be constructed
/// directly by other drivers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DependencySources {
    /// Ordered runtime classpath elements; duplicates and directories allowed
    #[serde(rename = "runtime-elements", default)]
    pub runtime_elements: Vec<String>,

    /// Resolved artifacts, appended after the runtime elements
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl DependencySources {
    /// Load a dependency description from a TOML file.
    ///
    /// The description is the output of the enclosing build's dependency
    /// resolution. An unreadable or unparsable file means the dependency graph
    /// is not available, which must abort the invocation before the generator
    /// is spawned: an incomplete classpath causes silent misbehavior
    /// downstream.
    pub fn load(path: &Path) -> Result<Self, StategenError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StategenError::ClasspathResolution {
                reason: format!("cannot read dependency description '{}': {e}", path.display()),
            })?;

        toml::from_str(&content).map_err(|e| StategenError::ClasspathResolution {
            reason: format!("invalid dependency description '{}': {e}", path.display()),
        })
    }
}

/// Produce the ordered, deduplicated classpath element list.
///
/// Runtime elements come first, in input order. Artifacts are appended in their
/// input order, skipping unresolved ones and any path already seen. Paths are
/// compared after lexical normalization only.
#[must_use]
pub fn resolve_elements(sources: &DependencySources) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut elements: Vec<PathBuf> = Vec::new();

    for element in &sources.runtime_elements {
        let path = normalize_path(Path::new(element));
        if seen.insert(path.clone()) {
            tracing::debug!(target: "classpath", "adding runtime element: {}", path.display());
            elements.push(path);
        }
    }

    for artifact in &sources.artifacts {
        let Some(file) = &artifact.file else {
            // Unresolved artifact: nothing to put on the classpath
            continue;
        };
        let path = normalize_path(file);
        if seen.insert(path.clone()) {
            tracing::debug!(target: "classpath", "adding artifact: {}", path.display());
            elements.push(path);
        }
    }

    elements
}

/// Join classpath elements with an explicit separator.
#[must_use]
pub fn join_classpath(elements: &[PathBuf], separator: char) -> String {
    let mut joined = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            joined.push(separator);
        }
        joined.push_str(&element.display().to_string());
    }
    joined
}

/// Resolve the full classpath string using the platform separator.
///
/// This is the value passed as the generator's `-cp` argument.
#[must_use]
pub fn resolve_classpath(sources: &DependencySources) -> String {
    let elements = resolve_elements(sources);
    let classpath = join_classpath(&elements, classpath_separator());
    tracing::debug!(target: "classpath", "classpath: {classpath}");
    classpath
}
