//! Integration test suite for stategen
//!
//! End-to-end tests that drive the real `stategen` binary against temporary
//! project directories and a recording fake generator, verifying the full
//! manifest -> classpath -> process pipeline including exit-code passthrough
//! and failure reporting.
//!
//! # Running
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: the generate command (argument marshalling, classpath
//!   content, exit codes, spawn failures)
//! - **init**: manifest scaffolding

mod generate;
mod init;
