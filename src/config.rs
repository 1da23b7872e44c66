//! Manifest parsing (`bootstrap/dependencies.json`).
//!
//! The manifest is a JSON object with a single recognized key,
//! `dependencies`, holding an ordered list of `{ "name": ..., "url": ... }`
//! records. Anything else (missing key, unknown keys, extra fields on an
//! entry) is a load-time error. No defaulting, no partial recovery: a
//! malformed manifest aborts the run before any fetch is attempted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "bootstrap/dependencies.json";

/// Default destination root, relative to the working directory.
pub const DEFAULT_DEST: &str = "external";

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub dependencies: Vec<DependencyDecl>,
}

/// One declared dependency. `name` doubles as the local directory name
/// under the destination root; `url` is whatever the git client accepts
/// as a clone source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DependencyDecl {
    pub name: String,
    pub url: String,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest: Manifest = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;
        Ok(manifest)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)
            .with_context(|| format!("Failed to write manifest {}", path.display()))?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DependencyDecl> {
        self.dependencies.iter().find(|d| d.name == name)
    }

    /// Insert a declaration, replacing an existing entry with the same name
    /// in place (order of the remaining entries is preserved). Returns true
    /// if an entry was replaced.
    pub fn insert(&mut self, decl: DependencyDecl) -> bool {
        if let Some(existing) = self.dependencies.iter_mut().find(|d| d.name == decl.name) {
            *existing = decl;
            true
        } else {
            self.dependencies.push(decl);
            false
        }
    }

    /// Remove a declaration by name. Returns true if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|d| d.name != name);
        self.dependencies.len() != before
    }
}
