//! Integration tests for the generate command.
//!
//! A recording fake generator (a shell script that dumps its argv to a file)
//! stands in for the real executable, so these tests verify the exact argument
//! vector the adapter produces and the exit-code passthrough behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a fake generator that records its argv (one argument per line) and
/// exits with the given code.
#[cfg(unix)]
fn write_fake_generator(dir: &Path, exit_code: i32) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let args_file = dir.join("recorded-args.txt");
    let script = dir.join("fake-generator.sh");
    fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {exit_code}\n", args_file.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    (script, args_file)
}

fn write_manifest(dir: &Path, executable: &Path, extra: &str) {
    fs::write(
        dir.join("stategen.toml"),
        format!(
            r#"
{extra}

[generator]
executable = "{exe}"
package-name = "com.example.machines"
class-name = "TrafficLight"
state-package = "com.example.states"

[dependencies]
runtime-elements = ["/a/out", "/b/lib1.jar"]

[[dependencies.artifacts]]
file = "/b/lib1.jar"

[[dependencies.artifacts]]

[[dependencies.artifacts]]
file = "/c/lib2.jar"
"#,
            exe = executable.display(),
        ),
    )
    .unwrap();
}

fn stategen() -> Command {
    Command::cargo_bin("stategen").unwrap()
}

#[cfg(unix)]
#[test]
fn test_generate_marshals_arguments_in_fixed_order() {
    let project = TempDir::new().unwrap();
    let (script, args_file) = write_fake_generator(project.path(), 0);
    write_manifest(project.path(), &script, "");

    stategen()
        .arg("generate")
        .arg("--manifest-path")
        .arg(project.path().join("stategen.toml"))
        .assert()
        .success();

    let recorded = fs::read_to_string(&args_file).unwrap();
    let args: Vec<&str> = recorded.lines().collect();

    // $0 is not recorded, so the vector starts at the first flag
    assert_eq!(args[0], "-outDirectory");
    assert_eq!(PathBuf::from(args[1]), project.path().join("target/generated-sources/stategen"));
    assert_eq!(args[2], "-buildDirectory");
    assert_eq!(PathBuf::from(args[3]), project.path().join("target/classes"));
    assert_eq!(args[4], "-outResDirectory");
    assert_eq!(
        PathBuf::from(args[5]),
        project.path().join("target/generated-sources/stategen-meta")
    );
    assert_eq!(&args[6..12], [
        "-outPackage",
        "com.example.machines",
        "-outClass",
        "TrafficLight",
        "-statePackage",
        "com.example.states",
    ]);
    // -cp must be the final pair, with the deduplicated classpath
    assert_eq!(&args[12..], ["-cp", "/a/out:/b/lib1.jar:/c/lib2.jar"]);
}

#[cfg(unix)]
#[test]
fn test_generate_debug_flag_prepended() {
    let project = TempDir::new().unwrap();
    let (script, args_file) = write_fake_generator(project.path(), 0);
    write_manifest(project.path(), &script, "");

    stategen()
        .arg("generate")
        .arg("--debug")
        .arg("--manifest-path")
        .arg(project.path().join("stategen.toml"))
        .assert()
        .success();

    let recorded = fs::read_to_string(&args_file).unwrap();
    let args: Vec<&str> = recorded.lines().collect();
    assert_eq!(args[0], "--debug");
    assert_eq!(args[args.len() - 2], "-cp");
}

#[cfg(unix)]
#[test]
fn test_generate_passes_nonzero_exit_code_through() {
    let project = TempDir::new().unwrap();
    let (script, _args_file) = write_fake_generator(project.path(), 7);
    write_manifest(project.path(), &script, "");

    stategen()
        .arg("generate")
        .arg("--manifest-path")
        .arg(project.path().join("stategen.toml"))
        .assert()
        .code(7);
}

#[test]
fn test_generate_with_missing_executable_reports_spawn_failure() {
    let project = TempDir::new().unwrap();
    write_manifest(project.path(), Path::new("/no/such/generator/binary"), "");

    stategen()
        .arg("generate")
        .arg("--manifest-path")
        .arg(project.path().join("stategen.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to spawn generator"));
}

#[test]
fn test_generate_with_unreadable_dependency_description_aborts_before_spawn() {
    let project = TempDir::new().unwrap();
    #[cfg(unix)]
    let (script, args_file) = write_fake_generator(project.path(), 0);
    #[cfg(not(unix))]
    let script = PathBuf::from("/no/such/generator");
    write_manifest(
        project.path(),
        &script,
        "dependency-description = \"target/never-generated.toml\"",
    );

    stategen()
        .arg("generate")
        .arg("--manifest-path")
        .arg(project.path().join("stategen.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to resolve classpath"));

    // nothing was spawned
    #[cfg(unix)]
    assert!(!args_file.exists());
}

#[test]
fn test_generate_without_manifest_reports_not_found() {
    let empty = TempDir::new().unwrap();

    stategen()
        .arg("generate")
        .current_dir(empty.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stategen.toml not found"));
}

#[cfg(unix)]
#[test]
fn test_generate_logs_command_line() {
    let project = TempDir::new().unwrap();
    let (script, _args_file) = write_fake_generator(project.path(), 0);
    write_manifest(project.path(), &script, "");

    // the assembled command line is logged before execution
    stategen()
        .arg("generate")
        .arg("--manifest-path")
        .arg(project.path().join("stategen.toml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("-cp /a/out:/b/lib1.jar:/c/lib2.jar"));
}
