//! Canonical locations inside the vault.

use crate::error::{Result, VaultError};
use crate::fs::FileSystem;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Application identifier, used for the default data directory.
pub const APP_ID: &str = "stashvault";

/// Name of the reserved trash folder directly under the vault root.
pub const TRASH_DIR: &str = "backup";

/// Where a new artifact should be written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveTarget {
    /// Directly under the vault root.
    #[default]
    Root,
    /// Inside a folder directly under the vault root.
    Folder(String),
}

impl SaveTarget {
    /// Build a target from an optional folder name; `None` or blank means the root.
    pub fn from_folder(folder: Option<&str>) -> Self {
        match folder.map(str::trim) {
            Some(name) if !name.is_empty() => SaveTarget::Folder(name.to_string()),
            _ => SaveTarget::Root,
        }
    }
}

/// Path resolver for a single vault root.
#[derive(Debug, Clone)]
pub struct VaultPaths {
    root: PathBuf,
}

impl VaultPaths {
    /// A relative `root` is taken from the current working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// The platform application data directory for Stashvault.
    ///
    /// On Linux: `~/.local/share/stashvault`
    /// On macOS: `~/Library/Application Support/stashvault`
    pub fn default_root() -> Result<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_ID)).ok_or_else(|| {
            VaultError::storage(
                APP_ID,
                io::Error::new(io::ErrorKind::NotFound, "no application data directory"),
            )
        })
    }

    /// The vault root, without touching the filesystem.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The vault root, created (with parents) if it does not exist yet.
    pub fn vault_root(&self, fs: &impl FileSystem) -> Result<&Path> {
        if !fs.exists(&self.root) {
            tracing::debug!(root = %self.root.display(), "creating vault root");
            fs.create_dir(&self.root, true)
                .map_err(|e| VaultError::storage(&self.root, e))?;
        }
        Ok(&self.root)
    }

    /// `<root>/backup`. Never created here.
    pub fn trash_root(&self) -> PathBuf {
        self.root.join(TRASH_DIR)
    }

    /// Location a save of `base_name + extension` into `target` writes to.
    ///
    /// No existence check is made: whatever is at the returned path gets
    /// overwritten by the save.
    pub fn resolve_save_path(&self, target: &SaveTarget, base_name: &str, extension: &str) -> PathBuf {
        let file_name = format!("{}{}", base_name, extension);
        match target {
            SaveTarget::Root => self.root.join(file_name),
            SaveTarget::Folder(folder) => self.root.join(folder).join(file_name),
        }
    }

    /// Whether `path` lies strictly below the vault root.
    pub fn is_inside_vault(&self, path: &Path) -> bool {
        is_strictly_below(path, &self.root)
    }

    /// Whether `path` lies strictly below the trash root.
    pub fn is_inside_trash(&self, path: &Path) -> bool {
        is_strictly_below(path, &self.trash_root())
    }

    /// Whether `path` is the trash root itself.
    pub fn is_trash_root(&self, path: &Path) -> bool {
        path == self.trash_root()
    }
}

fn is_strictly_below(path: &Path, base: &Path) -> bool {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return false;
    }
    match path.strip_prefix(base) {
        Ok(rest) => rest.components().next().is_some(),
        Err(_) => false,
    }
}

/// Check that `name` is usable as a single path segment.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VaultError::invalid_name(name, "name is empty"));
    }
    if name == "." || name == ".." {
        return Err(VaultError::invalid_name(name, "name is a relative path marker"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(VaultError::invalid_name(name, "name contains a path separator"));
    }
    if name.contains('\0') {
        return Err(VaultError::invalid_name(name, "name contains a NUL byte"));
    }
    Ok(())
}

/// Like [`validate_name`], but also rejects the reserved trash folder name.
pub fn validate_root_folder_name(name: &str) -> Result<()> {
    validate_name(name)?;
    if name == TRASH_DIR {
        return Err(VaultError::invalid_name(name, "reserved for the trash"));
    }
    Ok(())
}
