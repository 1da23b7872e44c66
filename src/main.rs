//! # depstrap CLI Entry Point
//!
//! Parses CLI arguments using clap and routes commands to the appropriate
//! handlers. Running `depstrap` with no subcommand is `depstrap fetch` with
//! the default manifest and destination.
//!
//! ## Command Structure
//!
//! - **Materialize**: `fetch` (default), `status`
//! - **Manifest**: `init`, `add`, `remove`
//! - **Shell**: `completion`

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::{Path, PathBuf};

use depstrap::config;
use depstrap::config::Manifest;
use depstrap::deps;

#[derive(Parser)]
#[command(name = "depstrap")]
#[command(about = "Declarative git dependency bootstrapper", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone every missing dependency, skip the rest
    Fetch {
        /// Manifest path
        #[arg(long, default_value = config::DEFAULT_MANIFEST)]
        manifest: PathBuf,
        /// Destination root, resolved against the working directory
        #[arg(long, default_value = config::DEFAULT_DEST)]
        dest: PathBuf,
    },
    /// Show which dependencies are materialized
    Status {
        /// Manifest path
        #[arg(long, default_value = config::DEFAULT_MANIFEST)]
        manifest: PathBuf,
        /// Destination root, resolved against the working directory
        #[arg(long, default_value = config::DEFAULT_DEST)]
        dest: PathBuf,
    },
    /// Write a starter manifest
    Init {
        /// Manifest path
        #[arg(long, default_value = config::DEFAULT_MANIFEST)]
        manifest: PathBuf,
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },
    /// Add a dependency to the manifest and fetch it
    Add {
        /// 'owner/repo' shorthand or full clone URL
        lib: String,
        /// Directory name (defaults to the repo name)
        #[arg(long)]
        name: Option<String>,
        /// Manifest path
        #[arg(long, default_value = config::DEFAULT_MANIFEST)]
        manifest: PathBuf,
        /// Destination root, resolved against the working directory
        #[arg(long, default_value = config::DEFAULT_DEST)]
        dest: PathBuf,
    },
    /// Remove a dependency from the manifest (the clone stays on disk)
    Remove {
        /// Dependency name to remove
        name: String,
        /// Manifest path
        #[arg(long, default_value = config::DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            let dest = resolve_dest(Path::new(config::DEFAULT_DEST))?;
            deps::fetch_dependencies(Path::new(config::DEFAULT_MANIFEST), &dest)?;
            Ok(())
        }

        Some(Commands::Fetch { manifest, dest }) => {
            let dest = resolve_dest(dest)?;
            deps::fetch_dependencies(manifest, &dest)?;
            Ok(())
        }

        Some(Commands::Status { manifest, dest }) => {
            let dest = resolve_dest(dest)?;
            deps::print_status(manifest, &dest)
        }

        Some(Commands::Init { manifest, force }) => init_manifest(manifest, *force),

        Some(Commands::Add {
            lib,
            name,
            manifest,
            dest,
        }) => {
            let dest = resolve_dest(dest)?;
            deps::add_dependency(lib, name.clone(), manifest, &dest)
        }

        Some(Commands::Remove { name, manifest }) => deps::remove_dependency(name, manifest),

        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Relative destinations are anchored at the working directory.
fn resolve_dest(dest: &Path) -> Result<PathBuf> {
    if dest.is_absolute() {
        Ok(dest.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(dest))
    }
}

fn init_manifest(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{} Error: manifest already exists at {} (use --force to overwrite).",
            "x".red(),
            path.display()
        );
        return Ok(());
    }

    Manifest::default().save(path)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    println!(
        "   Declare dependencies with {}.",
        "depstrap add <owner/repo>".white().bold()
    );
    Ok(())
}
