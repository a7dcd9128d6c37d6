//! Error handling for stategen
//!
//! This module provides the error types and user-friendly error reporting for the
//! stategen generator adapter. The error system is designed around two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`StategenError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Classpath resolution**: [`StategenError::ClasspathResolution`] - dependency
//!   metadata could not be read; the invocation aborts before anything is spawned,
//!   because an incomplete classpath causes silent misbehavior downstream.
//! - **Process supervision**: [`StategenError::SpawnFailed`] and
//!   [`StategenError::InterruptedWait`] - the generator could not be started, or
//!   the wait for its exit was interrupted. Neither produces an exit code.
//! - **Configuration**: [`StategenError::ManifestNotFound`],
//!   [`StategenError::ManifestParseError`], [`StategenError::ExecutableNotFound`].
//!
//! A non-zero exit code from the generator is deliberately *not* an error here.
//! The adapter's job is to run and report; judging the generator's success
//! criteria belongs to the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use stategen_cli::core::{StategenError, user_friendly_error};
//!
//! fn resolve() -> Result<(), StategenError> {
//!     Err(StategenError::ClasspathResolution {
//!         reason: "dependency graph has not been resolved".to_string(),
//!     })
//! }
//!
//! if let Err(e) = resolve() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display();
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for stategen operations.
///
/// Each variant represents a specific failure mode with enough context to act on.
/// Variants carrying an exit-code-free abort ([`SpawnFailed`](Self::SpawnFailed),
/// [`InterruptedWait`](Self::InterruptedWait)) terminate the invocation with no
/// [`InvocationResult`](crate::generator::InvocationResult) produced.
#[derive(Error, Debug)]
pub enum StategenError {
    /// Dependency metadata could not be read while building the classpath.
    ///
    /// This is fatal to the invocation and must abort before the generator is
    /// spawned: a partially built classpath would let the generator run against
    /// missing dependencies and fail in much harder to diagnose ways.
    #[error("failed to resolve classpath: {reason}")]
    ClasspathResolution {
        /// Why the dependency metadata was unreadable
        reason: String,
    },

    /// The generator executable could not be started.
    ///
    /// Covers a missing executable path, a non-executable file, and any other
    /// I/O failure that occurs before the child process exists. No exit code
    /// is available.
    #[error("failed to spawn generator '{executable}'")]
    SpawnFailed {
        /// The executable path that could not be run
        executable: String,
        /// The underlying I/O error from the spawn attempt
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the generator to exit was interrupted.
    ///
    /// The child may still be running; no exit code is available. The failure
    /// is surfaced so the caller can apply its own thread-management policy.
    #[error("interrupted while waiting for generator to exit")]
    InterruptedWait {
        /// The underlying I/O error from the wait
        #[source]
        source: std::io::Error,
    },

    /// The configured generator executable was not found on PATH.
    #[error("generator executable '{name}' not found in PATH")]
    ExecutableNotFound {
        /// The bare executable name that was looked up
        name: String,
    },

    /// Manifest file (stategen.toml) not found.
    ///
    /// stategen searches for stategen.toml starting from the current working
    /// directory and walking up the directory tree, similar to how git
    /// searches for .git.
    #[error("manifest file stategen.toml not found in current directory or any parent directory")]
    ManifestNotFound,

    /// Manifest parsing error
    #[error("invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Path to the manifest file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Manifest validation error
    #[error("manifest validation failed: {reason}")]
    ManifestValidationError {
        /// Reason why manifest validation failed
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for StategenError {
    fn clone(&self) -> Self {
        match self {
            Self::ClasspathResolution {
                reason,
            } => Self::ClasspathResolution {
                reason: reason.clone(),
            },
            Self::ExecutableNotFound {
                name,
            } => Self::ExecutableNotFound {
                name: name.clone(),
            },
            Self::ManifestNotFound => Self::ManifestNotFound,
            Self::ManifestParseError {
                file,
                reason,
            } => Self::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ManifestValidationError {
                reason,
            } => Self::ManifestValidationError {
                reason: reason.clone(),
            },
            // Errors wrapping io::Error don't implement Clone; flatten to Other
            Self::SpawnFailed {
                executable,
                source,
            } => Self::Other {
                message: format!("failed to spawn generator '{executable}': {source}"),
            },
            Self::InterruptedWait {
                source,
            } => Self::Other {
                message: format!("interrupted while waiting for generator to exit: {source}"),
            },
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// `ErrorContext` wraps a [`StategenError`] and adds optional suggestions and
/// details. This is the primary way stategen presents errors to CLI users.
///
/// # Display Format
///
/// 1. **Error**: the main error message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use stategen_cli::core::{StategenError, ErrorContext};
///
/// let context = ErrorContext::new(StategenError::ManifestNotFound)
///     .with_suggestion("Run 'stategen init' to create a stategen.toml")
///     .with_details("stategen searches current and parent directories for stategen.toml");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying stategen error
    pub error: StategenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: StategenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions should be actionable steps; they are displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details explain why the error occurred; they are displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// This is the main entry point for converting arbitrary errors into
/// user-friendly messages for CLI display. It recognizes [`StategenError`]
/// variants, [`std::io::Error`], and [`toml::de::Error`] and provides
/// appropriate context; anything else gets generic formatting with the full
/// error chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(stategen_error) = error.downcast_ref::<StategenError>() {
        return create_error_context(stategen_error.clone());
    }

    // downcast_ref pierces Context wrappers, so only treat this as a bare io
    // error when no context frames would be lost
    if error.chain().count() == 1 {
        if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    return ErrorContext::new(StategenError::Other {
                        message: format!("permission denied: {io_error}"),
                    })
                    .with_suggestion("Check file ownership, or run with elevated permissions")
                    .with_details(
                        "stategen does not have permission to read or write a required file",
                    );
                }
                std::io::ErrorKind::NotFound => {
                    return ErrorContext::new(StategenError::Other {
                        message: format!("file not found: {io_error}"),
                    })
                    .with_suggestion(
                        "Check that the file or directory exists and the path is correct",
                    );
                }
                _ => {}
            }
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(StategenError::ManifestParseError {
            file: "stategen.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion(
            "Check the TOML syntax in your stategen.toml. Verify quotes, brackets, and table headers",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(StategenError::Other {
        message,
    })
}

/// Map each [`StategenError`] variant to an [`ErrorContext`] with tailored
/// suggestions. Used by [`user_friendly_error`].
fn create_error_context(error: StategenError) -> ErrorContext {
    match &error {
        StategenError::ClasspathResolution { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Verify the [dependencies] section of stategen.toml and that the referenced paths are spelled correctly",
            )
            .with_details(
                "The generator is invoked with the project classpath; an unreadable dependency description would produce an incomplete classpath and silent misbehavior downstream",
            ),

        StategenError::SpawnFailed { executable, .. } => {
            let executable = executable.clone();
            ErrorContext::new(error).with_suggestion(format!(
                "Check that '{executable}' exists and is executable, or set [generator].executable in stategen.toml"
            ))
        }

        StategenError::InterruptedWait { .. } => ErrorContext::new(error)
            .with_details("The generator process may still be running; its exit code was not observed"),

        StategenError::ExecutableNotFound { name } => {
            let name = name.clone();
            ErrorContext::new(error).with_suggestion(format!(
                "Install '{name}' or configure an absolute path in [generator].executable"
            ))
        }

        StategenError::ManifestNotFound => ErrorContext::new(StategenError::ManifestNotFound)
            .with_suggestion("Run 'stategen init' to create a stategen.toml in your project directory")
            .with_details("stategen searches the current directory and parent directories for stategen.toml"),

        StategenError::ManifestParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax in your stategen.toml file"),

        StategenError::ManifestValidationError { .. } => ErrorContext::new(error)
            .with_suggestion("Fix the reported field in stategen.toml and re-run"),

        _ => ErrorContext::new(error),
    }
}
