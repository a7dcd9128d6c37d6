//! Core types and error handling for stategen.
//!
//! This module hosts the error taxonomy shared by the classpath resolver, the
//! process orchestrator, and the CLI. See [`error`] for the full design.

pub mod error;

pub use error::{ErrorContext, StategenError, user_friendly_error};
