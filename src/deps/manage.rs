//! Manifest management commands.
//!
//! - `depstrap add <lib>` - Add a dependency and fetch it
//! - `depstrap remove <name>` - Drop a dependency from the manifest

use crate::config::{DependencyDecl, Manifest};
use anyhow::Result;
use colored::*;

use std::path::Path;

pub fn add_dependency(
    lib_input: &str,
    name_override: Option<String>,
    manifest_path: &Path,
    dest_root: &Path,
) -> Result<()> {
    if !manifest_path.exists() {
        println!(
            "{} Error: {} not found. Run {} first.",
            "x".red(),
            manifest_path.display(),
            "depstrap init".bold().white()
        );
        return Ok(());
    }

    // Accept a full clone URL or a GitHub owner/repo shorthand.
    let Some((derived_name, url)) = parse_lib_input(lib_input) else {
        println!(
            "{} Invalid format. Use 'owner/repo' or a full clone URL.",
            "x".red()
        );
        return Ok(());
    };
    let name = name_override.unwrap_or(derived_name);

    println!("{} Adding dependency: {}...", "📦".blue(), name.bold());

    let mut manifest = Manifest::load(manifest_path)?;
    let replaced = manifest.insert(DependencyDecl {
        name: name.clone(),
        url,
    });
    if replaced {
        println!("{} Dependency '{}' updated.", "!".yellow(), name);
    }
    manifest.save(manifest_path)?;
    println!(
        "{} Added {} to {}",
        "✓".green(),
        name,
        manifest_path.display()
    );

    // Fetch immediately so the new entry is materialized.
    super::fetch::fetch_declared(&super::fetch::GitClient::default(), &manifest, dest_root)?;
    Ok(())
}

pub fn remove_dependency(name: &str, manifest_path: &Path) -> Result<()> {
    if !manifest_path.exists() {
        println!(
            "{} Error: {} not found.",
            "x".red(),
            manifest_path.display()
        );
        return Ok(());
    }

    let mut manifest = Manifest::load(manifest_path)?;
    if manifest.remove(name) {
        manifest.save(manifest_path)?;
        println!("{} Removed dependency: {}", "🗑️".red(), name.bold());
        println!(
            "   {} Any clone under the destination root is left on disk.",
            "!".yellow()
        );
    } else {
        println!(
            "{} Dependency '{}' not found in {}",
            "!".yellow(),
            name,
            manifest_path.display()
        );
    }

    Ok(())
}

/// Resolve user input to a (name, url) pair. The name is the last path
/// segment with any `.git` suffix dropped.
fn parse_lib_input(lib_input: &str) -> Option<(String, String)> {
    if lib_input.contains("http") || lib_input.contains("git@") {
        let name = lib_input
            .split('/')
            .next_back()
            .unwrap_or("unknown")
            .trim_end_matches(".git")
            .to_string();
        return Some((name, lib_input.to_string()));
    }

    let parts: Vec<&str> = lib_input.split('/').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        let name = parts[1].to_string();
        let url = format!("https://github.com/{}.git", lib_input);
        return Some((name, url));
    }

    None
}
