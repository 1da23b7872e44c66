//! Dependency materialization.
//!
//! This module turns the manifest's declaration list into directories under
//! the destination root, one `git clone` per missing entry.
//!
//! ## Semantics
//!
//! - Sequential, in manifest order
//! - Existence of `<root>/<name>` is the only "already done" marker
//! - A failed clone aborts the run; later entries are not attempted
//! - No retries, no timeout, no cleanup of a failed partial clone

use crate::config::{DependencyDecl, Manifest};
use anyhow::{Context, Result};
use colored::*;

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// What happened to a single declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterializeAction {
    Cloned,
    Skipped,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchOutcome {
    pub cloned: usize,
    pub skipped: usize,
}

/// Thin handle over the external git client. The clone subprocess's exit
/// status is the only success signal; its stderr is surfaced on failure.
pub struct GitClient {
    program: OsString,
}

impl Default for GitClient {
    fn default() -> Self {
        Self::with_program("git")
    }
}

impl GitClient {
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn clone_into(&self, url: &str, dest: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .arg(dest)
            .output()
            .with_context(|| {
                format!(
                    "Failed to run '{} clone' (is git installed?)",
                    self.program.to_string_lossy()
                )
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            eprint!("{}", stderr);
        }
        Err(anyhow::anyhow!(
            "'git clone {}' exited with {}",
            url,
            output.status
        ))
    }
}

/// Load the manifest and materialize every declaration under `dest_root`.
///
/// Manifest errors abort before anything is created under the root.
pub fn fetch_dependencies(manifest_path: &Path, dest_root: &Path) -> Result<FetchOutcome> {
    let manifest = Manifest::load(manifest_path)?;
    fetch_declared(&GitClient::default(), &manifest, dest_root)
}

pub fn fetch_declared(
    git: &GitClient,
    manifest: &Manifest,
    dest_root: &Path,
) -> Result<FetchOutcome> {
    fs::create_dir_all(dest_root).with_context(|| {
        format!(
            "Failed to create destination root {}",
            dest_root.display()
        )
    })?;

    if !manifest.dependencies.is_empty() {
        println!(
            "{} Checking {} dependencies...",
            "📦".blue(),
            manifest.dependencies.len()
        );
    }

    let mut outcome = FetchOutcome::default();
    for decl in &manifest.dependencies {
        match materialize_one(git, dest_root, decl)? {
            MaterializeAction::Cloned => outcome.cloned += 1,
            MaterializeAction::Skipped => outcome.skipped += 1,
        }
    }

    println!(
        "{} Done: {} cloned, {} skipped",
        "✓".green(),
        outcome.cloned,
        outcome.skipped
    );
    Ok(outcome)
}

/// Materialize a single declaration. An existing entry at the target path is
/// trusted as-is; there is no check that it is a valid clone of `url`.
pub fn materialize_one(
    git: &GitClient,
    dest_root: &Path,
    decl: &DependencyDecl,
) -> Result<MaterializeAction> {
    let target = dest_root.join(&decl.name);
    if target.exists() {
        println!(
            "   {} '{}' already cloned, skipping",
            "⚡".green(),
            decl.name.bold()
        );
        return Ok(MaterializeAction::Skipped);
    }

    println!(
        "   {} Cloning '{}' from {}...",
        "📦".blue(),
        decl.name.bold(),
        decl.url
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Downloading {}...", decl.name));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = git.clone_into(&decl.url, &target);
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            println!("   {} Cloned {}", "✓".green(), decl.name.bold());
            Ok(MaterializeAction::Cloned)
        }
        Err(err) => {
            println!("   {} Failed {}", "x".red(), decl.name.bold());
            Err(err).with_context(|| format!("Failed to clone dependency '{}'", decl.name))
        }
    }
}
