//! Dependency materialization and manifest management.
//!
//! This module covers all dependency-related operations:
//!
//! - **Fetching**: Clone every missing dependency, skip the rest
//! - **Management**: Add and remove manifest entries
//! - **Status**: Report which dependencies are materialized
//!
//! ## Commands
//!
//! - `depstrap fetch` - Materialize the manifest (also the default)
//! - `depstrap add <lib>` - Add a dependency and fetch it
//! - `depstrap remove <name>` - Drop a dependency from the manifest
//! - `depstrap status` - Show on-disk state per dependency

mod fetch;
mod manage;
mod status;

pub use fetch::{
    FetchOutcome, GitClient, MaterializeAction, fetch_declared, fetch_dependencies,
    materialize_one,
};
pub use manage::{add_dependency, remove_dependency};
pub use status::print_status;
