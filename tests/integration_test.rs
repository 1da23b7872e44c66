//! Integration tests for depstrap
//!
//! These tests drive the compiled binary against temporary project
//! directories. Clone traffic is intercepted by a fake `git` placed ahead
//! of the real one on `PATH`; it records every invocation and creates the
//! destination directory, so no network is involved.

#[cfg(unix)]
use std::ffi::OsString;
use std::fs;
use std::path::Path;
#[cfg(unix)]
use std::path::PathBuf;
use std::process::Command;

fn depstrap_binary() -> &'static str {
    env!("CARGO_BIN_EXE_depstrap")
}

fn write_manifest(project: &Path, body: &str) {
    let bootstrap = project.join("bootstrap");
    fs::create_dir_all(&bootstrap).expect("Failed to create bootstrap directory");
    fs::write(bootstrap.join("dependencies.json"), body).expect("Failed to write manifest");
}

const TWO_DEPS: &str = r#"{
    "dependencies": [
        {"name": "libfoo", "url": "https://example.com/libfoo.git"},
        {"name": "libbar", "url": "https://example.com/libbar.git"}
    ]
}"#;

/// Install a fake `git` into `<project>/fakebin` and return that directory.
/// The shim appends `<url> <dest>` to `<project>/git.log`, creates the
/// destination directory, and exits 128 for URLs containing "unreachable".
#[cfg(unix)]
fn install_fake_git(project: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = project.join("fakebin");
    fs::create_dir_all(&bin_dir).expect("Failed to create fakebin directory");

    let log = project.join("git.log");
    let script = format!(
        r#"#!/bin/sh
echo "$2 $3" >> "{log}"
case "$2" in
    *unreachable*) echo "fatal: unable to access '$2'" >&2; exit 128;;
esac
mkdir -p "$3"
"#,
        log = log.display()
    );

    let git = bin_dir.join("git");
    fs::write(&git, script).expect("Failed to write fake git");
    fs::set_permissions(&git, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake git executable");
    bin_dir
}

#[cfg(unix)]
fn path_with(bin_dir: &Path) -> OsString {
    let mut path = bin_dir.as_os_str().to_os_string();
    path.push(":");
    path.push(std::env::var_os("PATH").unwrap_or_default());
    path
}

#[cfg(unix)]
fn git_log(project: &Path) -> Vec<String> {
    fs::read_to_string(project.join("git.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(unix)]
fn run_fetch(project: &Path, bin_dir: &Path) -> std::process::Output {
    Command::new(depstrap_binary())
        .arg("fetch")
        .env("PATH", path_with(bin_dir))
        .current_dir(project)
        .output()
        .expect("Failed to execute depstrap fetch")
}

#[cfg(unix)]
#[test]
fn test_fetch_clones_missing_dependencies_in_order() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(project.path(), TWO_DEPS);
    let bin_dir = install_fake_git(project.path());

    let output = run_fetch(project.path(), &bin_dir);
    assert!(
        output.status.success(),
        "Fetch failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(project.path().join("external").join("libfoo").is_dir());
    assert!(project.path().join("external").join("libbar").is_dir());

    let log = git_log(project.path());
    assert_eq!(log.len(), 2, "Expected exactly two clone invocations");
    assert!(log[0].contains("libfoo.git"));
    assert!(log[1].contains("libbar.git"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cloning 'libfoo' from https://example.com/libfoo.git"));
}

#[cfg(unix)]
#[test]
fn test_second_run_performs_zero_clones() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(project.path(), TWO_DEPS);
    let bin_dir = install_fake_git(project.path());

    assert!(run_fetch(project.path(), &bin_dir).status.success());
    let output = run_fetch(project.path(), &bin_dir);
    assert!(output.status.success());

    // Still only the first run's two invocations.
    assert_eq!(git_log(project.path()).len(), 2);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'libfoo' already cloned, skipping"));
    assert!(stdout.contains("'libbar' already cloned, skipping"));
}

#[cfg(unix)]
#[test]
fn test_preexisting_directory_is_skipped() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(project.path(), TWO_DEPS);
    let bin_dir = install_fake_git(project.path());

    fs::create_dir_all(project.path().join("external").join("libfoo")).unwrap();

    let output = run_fetch(project.path(), &bin_dir);
    assert!(output.status.success());

    let log = git_log(project.path());
    assert_eq!(log.len(), 1);
    assert!(log[0].contains("libbar.git"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'libfoo' already cloned, skipping"));
}

#[cfg(unix)]
#[test]
fn test_failed_clone_is_fail_fast() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(
        project.path(),
        r#"{
            "dependencies": [
                {"name": "first", "url": "https://example.com/first.git"},
                {"name": "second", "url": "https://unreachable.example.com/second.git"},
                {"name": "third", "url": "https://example.com/third.git"}
            ]
        }"#,
    );
    let bin_dir = install_fake_git(project.path());

    let output = run_fetch(project.path(), &bin_dir);
    assert!(!output.status.success(), "Fetch should have failed");

    // First succeeded and stays on disk; third was never attempted.
    assert!(project.path().join("external").join("first").is_dir());
    assert!(!project.path().join("external").join("third").exists());

    let log = git_log(project.path());
    assert_eq!(log.len(), 2);

    // The git client's own diagnostics surface on stderr.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal: unable to access"));
    assert!(stderr.contains("second"));
}

#[test]
fn test_malformed_manifest_aborts_before_creating_the_root() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(project.path(), r#"{"deps": []}"#);

    let output = Command::new(depstrap_binary())
        .arg("fetch")
        .current_dir(project.path())
        .output()
        .expect("Failed to execute depstrap fetch");

    assert!(!output.status.success());
    assert!(!project.path().join("external").exists());
}

#[test]
fn test_missing_manifest_is_fatal() {
    let project = tempfile::tempdir().unwrap();

    let output = Command::new(depstrap_binary())
        .arg("fetch")
        .current_dir(project.path())
        .output()
        .expect("Failed to execute depstrap fetch");

    assert!(!output.status.success());
    assert!(!project.path().join("external").exists());
}

#[test]
fn test_bare_invocation_defaults_to_fetch() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(project.path(), r#"{"dependencies": []}"#);

    let output = Command::new(depstrap_binary())
        .current_dir(project.path())
        .output()
        .expect("Failed to execute depstrap");

    assert!(
        output.status.success(),
        "Bare run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.path().join("external").is_dir());
}

#[test]
fn test_status_reports_missing_and_creates_nothing() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(
        project.path(),
        r#"{"dependencies": [{"name": "libfoo", "url": "https://example.com/libfoo.git"}]}"#,
    );

    let output = Command::new(depstrap_binary())
        .arg("status")
        .current_dir(project.path())
        .output()
        .expect("Failed to execute depstrap status");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("libfoo"));
    assert!(stdout.contains("missing"));
    assert!(!project.path().join("external").exists());
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let project = tempfile::tempdir().unwrap();
    let manifest = project.path().join("bootstrap").join("dependencies.json");

    let run_init = |extra: &[&str]| {
        Command::new(depstrap_binary())
            .arg("init")
            .args(extra)
            .current_dir(project.path())
            .output()
            .expect("Failed to execute depstrap init")
    };

    assert!(run_init(&[]).status.success());
    fs::write(
        &manifest,
        r#"{"dependencies": [{"name": "keep", "url": "https://example.com/keep.git"}]}"#,
    )
    .unwrap();

    // Plain init leaves the edited manifest alone.
    assert!(run_init(&[]).status.success());
    assert!(fs::read_to_string(&manifest).unwrap().contains("keep"));

    // --force resets it.
    assert!(run_init(&["--force"]).status.success());
    assert!(!fs::read_to_string(&manifest).unwrap().contains("keep"));
}

#[cfg(unix)]
#[test]
fn test_add_then_remove_round_trip() {
    let project = tempfile::tempdir().unwrap();
    write_manifest(project.path(), r#"{"dependencies": []}"#);
    let bin_dir = install_fake_git(project.path());
    let manifest = project.path().join("bootstrap").join("dependencies.json");

    let output = Command::new(depstrap_binary())
        .args(["add", "acme/widgets"])
        .env("PATH", path_with(&bin_dir))
        .current_dir(project.path())
        .output()
        .expect("Failed to execute depstrap add");
    assert!(
        output.status.success(),
        "Add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let saved = fs::read_to_string(&manifest).unwrap();
    assert!(saved.contains("https://github.com/acme/widgets.git"));
    assert!(project.path().join("external").join("widgets").is_dir());

    let output = Command::new(depstrap_binary())
        .args(["remove", "widgets"])
        .current_dir(project.path())
        .output()
        .expect("Failed to execute depstrap remove");
    assert!(output.status.success());

    let saved = fs::read_to_string(&manifest).unwrap();
    assert!(!saved.contains("widgets"));

    // Stale-removal is out of scope: the clone stays on disk.
    assert!(project.path().join("external").join("widgets").is_dir());
}
