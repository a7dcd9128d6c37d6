//! Generator process orchestration.
//!
//! Builds the argument vector for the external state-machine generator, spawns
//! it with inherited console I/O, waits for it to exit, and reports the outcome.
//! The orchestrator never interprets the generator's own output.
//!
//! # Argument contract
//!
//! The generator depends on a fixed flag order, not declaration order:
//!
//! ```text
//! <executable> [--debug] -outDirectory <dir> -buildDirectory <dir>
//!   -outResDirectory <dir> -outPackage <pkg> -outClass <name>
//!   -statePackage <pkg> -cp <classpath-string>
//! ```
//!
//! `-cp <classpath>` must be the final pair: the generator may treat everything
//! after `-cp` as part of the classpath value. `-statePackage` is emitted even
//! when its value is empty, preserving the fixed arity the generator expects.
//!
//! # Failure semantics
//!
//! A non-zero exit code is *data*, reported in [`InvocationResult`] for the
//! caller to judge. Only two conditions are errors: the process could not be
//! started ([`StategenError::SpawnFailed`]) or the wait for its exit failed
//! ([`StategenError::InterruptedWait`]). Both abort with no exit code and are
//! never retried.

use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::StategenError;
use crate::utils::resolve_executable;

/// Immutable configuration for one generator invocation.
///
/// Constructed once (normally by [`crate::config::Manifest::generator_config`])
/// and passed by reference into [`run`]. The directory defaults are computed by
/// the configuration layer; the orchestrator takes every field as given.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path or command name of the generator executable
    pub executable: PathBuf,
    /// Directory the generator writes generated sources into
    pub output_directory: PathBuf,
    /// Directory holding the project's compiled classes
    pub build_directory: PathBuf,
    /// Directory the generator writes generated resources into
    pub resources_output_directory: PathBuf,
    /// Package name for the generated class
    pub package_name: String,
    /// Simple name of the generated class
    pub class_name: String,
    /// Package to scan for state definitions; may be empty, still passed through
    pub state_package: String,
    /// Pass `--debug` to the generator
    pub debug: bool,
}

/// Outcome of running the generator.
///
/// Created at the end of one orchestration run; a result only exists when the
/// process was actually spawned and waited on. Spawn and wait failures surface
/// as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationResult {
    /// The generator's exit status; `None` when the child was terminated by a
    /// signal and no numeric code exists
    pub exit_code: Option<i32>,
}

impl InvocationResult {
    /// Whether the generator exited with code 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Build the generator argument vector, executable first.
///
/// Pure argument marshalling; the fixed ordering here is the external
/// contract, so changes to field order elsewhere must not reorder this.
#[must_use]
pub fn build_args(config: &GeneratorConfig, classpath: &str) -> Vec<String> {
    let mut args = Vec::with_capacity(16);
    args.push(config.executable.display().to_string());
    if config.debug {
        args.push("--debug".to_string());
    }
    args.push("-outDirectory".to_string());
    args.push(config.output_directory.display().to_string());
    args.push("-buildDirectory".to_string());
    args.push(config.build_directory.display().to_string());
    args.push("-outResDirectory".to_string());
    args.push(config.resources_output_directory.display().to_string());
    args.push("-outPackage".to_string());
    args.push(config.package_name.clone());
    args.push("-outClass".to_string());
    args.push(config.class_name.clone());
    args.push("-statePackage".to_string());
    args.push(config.state_package.clone());
    // must be at end
    args.push("-cp".to_string());
    args.push(classpath.to_string());
    args
}

/// Spawn the generator and wait for it to exit.
///
/// The child's stdout and stderr are inherited from this process so its output
/// is visible live and interleaved on the invoking console; nothing is
/// captured or buffered. The calling task blocks until the child exits; there
/// is no timeout and no retry. One call is one complete, terminal invocation.
pub async fn run(
    config: &GeneratorConfig,
    classpath: &str,
) -> Result<InvocationResult, StategenError> {
    let executable = resolve_executable(&config.executable)?;

    let mut args = build_args(config, classpath);
    args[0] = executable.display().to_string();

    tracing::info!(target: "generator", "generation started");
    tracing::info!(target: "generator", "{}", args.join(" "));

    let mut command = Command::new(&executable);
    command
        .args(&args[1..])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = command.spawn().map_err(|e| {
        tracing::error!(
            target: "generator",
            "failed to spawn '{}': {e}",
            executable.display()
        );
        StategenError::SpawnFailed {
            executable: executable.display().to_string(),
            source: e,
        }
    })?;

    let status = child.wait().await.map_err(|e| {
        tracing::error!(target: "generator", "interrupted while waiting for generator: {e}");
        StategenError::InterruptedWait {
            source: e,
        }
    })?;

    match status.code() {
        Some(0) => tracing::info!(target: "generator", "generation complete"),
        Some(code) => {
            tracing::warn!(target: "generator", "generator exited with code {code}");
        }
        None => tracing::warn!(target: "generator", "generator terminated by signal"),
    }

    Ok(InvocationResult {
        exit_code: status.code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(debug: bool, state_package: &str) -> GeneratorConfig {
        GeneratorConfig {
            executable: PathBuf::from("/opt/gen/bin/gen"),
            output_directory: PathBuf::from("/p/target/generated-sources/stategen"),
            build_directory: PathBuf::from("/p/target/classes"),
            resources_output_directory: PathBuf::from("/p/target/generated-sources/stategen-meta"),
            package_name: "com.example.machines".to_string(),
            class_name: "TrafficLight".to_string(),
            state_package: state_package.to_string(),
            debug,
        }
    }

    #[test]
    fn test_args_fixed_order_without_debug() {
        let args = build_args(&config(false, "com.example.states"), "/a/out:/b/lib.jar");
        assert_eq!(
            args,
            vec![
                "/opt/gen/bin/gen",
                "-outDirectory",
                "/p/target/generated-sources/stategen",
                "-buildDirectory",
                "/p/target/classes",
                "-outResDirectory",
                "/p/target/generated-sources/stategen-meta",
                "-outPackage",
                "com.example.machines",
                "-outClass",
                "TrafficLight",
                "-statePackage",
                "com.example.states",
                "-cp",
                "/a/out:/b/lib.jar",
            ]
        );
    }

    #[test]
    fn test_debug_flag_immediately_after_executable() {
        let args = build_args(&config(true, "s"), "cp");
        assert_eq!(args[0], "/opt/gen/bin/gen");
        assert_eq!(args[1], "--debug");
        // exactly one occurrence
        assert_eq!(args.iter().filter(|a| a.as_str() == "--debug").count(), 1);
    }

    #[test]
    fn test_no_debug_token_when_disabled() {
        let args = build_args(&config(false, "s"), "cp");
        assert!(!args.iter().any(|a| a == "--debug"));
    }

    #[test]
    fn test_cp_is_always_the_final_pair() {
        for (debug, state_package) in [(false, ""), (true, ""), (false, "pkg"), (true, "pkg")] {
            let args = build_args(&config(debug, state_package), "the-classpath");
            let n = args.len();
            assert_eq!(args[n - 2], "-cp");
            assert_eq!(args[n - 1], "the-classpath");
        }
    }

    #[test]
    fn test_empty_state_package_still_emitted() {
        let args = build_args(&config(false, ""), "cp");
        let idx = args.iter().position(|a| a == "-statePackage").unwrap();
        assert_eq!(args[idx + 1], "");
        // arity is fixed: empty value passed through, not omitted
        assert_eq!(args[idx + 2], "-cp");
    }

    #[tokio::test]
    async fn test_run_with_missing_executable_is_spawn_failure() {
        let mut cfg = config(false, "");
        cfg.executable = PathBuf::from("/no/such/generator/binary");
        let result = run(&cfg, "cp").await;
        match result {
            Err(StategenError::SpawnFailed {
                executable, ..
            }) => {
                assert_eq!(executable, "/no/such/generator/binary");
            }
            other => panic!("expected SpawnFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_with_unknown_command_fails_before_spawn() {
        let mut cfg = config(false, "");
        cfg.executable = PathBuf::from("stategen-no-such-command-xyz");
        let result = run(&cfg, "cp").await;
        assert!(matches!(result, Err(StategenError::ExecutableNotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_nonzero_exit_as_data() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-gen.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut cfg = config(false, "");
        cfg.executable = script;
        let result = run(&cfg, "cp").await.unwrap();
        assert_eq!(result.exit_code, Some(3));
        assert!(!result.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_success_exit_code_zero() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-gen.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut cfg = config(true, "");
        cfg.executable = script;
        let result = run(&cfg, "cp").await.unwrap();
        assert_eq!(result.exit_code, Some(0));
        assert!(result.success());
    }
}
