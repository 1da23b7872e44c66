//! # depstrap - Declarative Git Dependency Bootstrapper
//!
//! depstrap reads a JSON manifest of named git dependencies and makes sure
//! each one exists as a directory under a destination root, cloning what's
//! missing and skipping what's there.
//!
//! ## Features
//!
//! - **Declarative**: One manifest (`bootstrap/dependencies.json`), one
//!   directory per dependency under `external/`
//! - **Idempotent**: Existence of the directory is the done-marker; a
//!   second run performs zero clones
//! - **Fail-fast**: A failed clone aborts the run with git's own diagnostics
//! - **Hands-off**: The external `git` client does the actual cloning
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a starter manifest
//! depstrap init
//!
//! # Declare and fetch a dependency
//! depstrap add raysan5/raylib
//!
//! # Materialize everything that's missing
//! depstrap
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Manifest parsing (`bootstrap/dependencies.json`)
//! - [`deps`] - Materialization, manifest management, status report
//! - [`ui`] - Terminal UI utilities (tables, colors)

/// Manifest parsing (`bootstrap/dependencies.json`).
pub mod config;

/// Dependency materialization and manifest management.
pub mod deps;

/// Terminal UI utilities (tables, colors).
pub mod ui;
