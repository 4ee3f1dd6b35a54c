//! CLI command implementations.

pub mod args;
pub mod output;

pub mod extensions;
pub mod folder;
pub mod save;
pub mod show;
pub mod trash;
pub mod tree;

pub use args::{Cli, Commands};
pub use output::Output;

use crate::engine::VaultEngine;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied path against the vault root unless it is absolute.
pub(crate) fn vault_path(engine: &VaultEngine, path: &Path) -> PathBuf {
    if path.is_absolute() {
        engine.resolve_path(path)
    } else {
        engine.root().join(path)
    }
}
