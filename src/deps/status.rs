//! Read-only materialization report.
//!
//! `depstrap status` lists every declared dependency with its on-disk
//! state. It never creates directories and never fetches. When a target is
//! a valid git repository the short HEAD hash is shown; a target that
//! merely exists still counts as materialized, matching the fetch loop's
//! existence-only semantics.

use crate::config::Manifest;
use anyhow::Result;
use colored::*;

use std::path::Path;

pub fn print_status(manifest_path: &Path, dest_root: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;

    if manifest.dependencies.is_empty() {
        println!("{} No dependencies declared.", "!".yellow());
        return Ok(());
    }

    let mut table = crate::ui::Table::new(&["Name", "Url", "State"]);
    let mut present = 0usize;

    for decl in &manifest.dependencies {
        let target = dest_root.join(&decl.name);
        let state = if target.exists() {
            present += 1;
            match head_short_hash(&target) {
                Some(hash) => format!("cloned @ {}", hash).green().to_string(),
                None => "present (not a git repo)".yellow().to_string(),
            }
        } else {
            "missing".red().to_string()
        };
        table.add_row(vec![decl.name.bold().to_string(), decl.url.clone(), state]);
    }

    table.print();
    println!(
        "{} {}/{} materialized under {}",
        "📦".blue(),
        present,
        manifest.dependencies.len(),
        dest_root.display()
    );
    Ok(())
}

fn head_short_hash(path: &Path) -> Option<String> {
    let repo = git2::Repository::open(path).ok()?;
    let commit = repo.head().ok()?.peel_to_commit().ok()?;
    Some(commit.id().to_string().chars().take(7).collect())
}
