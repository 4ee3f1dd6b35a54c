//! Recursive listing of the vault as a folder/file tree.

use crate::error::{Result, VaultError};
use crate::fs::FileSystem;
use crate::paths::TRASH_DIR;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A node of the vault tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Folder(FolderNode),
    File(FileNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Node::Folder(folder) => &folder.path,
            Node::File(file) => &file.path,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }
}

/// A directory in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderNode {
    /// Last path segment.
    pub name: String,
    /// Absolute location.
    pub path: PathBuf,
    /// Direct children in directory enumeration order.
    pub children: Vec<Node>,
}

impl FolderNode {
    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name() == name)
    }
}

/// A file in the vault. Contents are not part of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    /// File name including extension.
    pub name: String,
    /// Absolute location.
    pub path: PathBuf,
}

impl FileNode {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Flat summary of a folder seen during a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSummary {
    pub name: String,
    pub path: PathBuf,
    /// Number of direct children (files and folders).
    pub child_count: usize,
}

/// Result of [`build_tree`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tree {
    /// Top-level nodes.
    pub nodes: Vec<Node>,
    /// Every folder visited, in walk order (pre-order).
    pub folders: Vec<FolderSummary>,
}

impl Tree {
    /// Find a top-level node by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    /// Total number of files anywhere in the tree.
    pub fn file_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    Node::File(_) => 1,
                    Node::Folder(f) => count(&f.children),
                })
                .sum()
        }
        count(&self.nodes)
    }
}

/// Walk `root` and build its tree.
///
/// When `root` is `vault_root`, a directory named `backup` directly beneath it
/// is skipped entirely. Directories with that name anywhere else are ordinary
/// folders. Entries that are neither files nor directories are ignored.
///
/// Any listing failure aborts the whole walk with [`VaultError::TreeRead`].
pub fn build_tree(fs: &impl FileSystem, vault_root: &Path, root: &Path) -> Result<Tree> {
    let mut folders = Vec::new();
    let nodes = walk(fs, vault_root, root, &mut folders)?;
    Ok(Tree { nodes, folders })
}

fn walk(
    fs: &impl FileSystem,
    vault_root: &Path,
    dir: &Path,
    folders: &mut Vec<FolderSummary>,
) -> Result<Vec<Node>> {
    let entries = fs
        .read_dir(dir)
        .map_err(|e| VaultError::tree_read(dir, e))?;
    let at_vault_root = dir == vault_root;

    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = dir.join(&entry.name);

        if entry.is_dir {
            if at_vault_root && entry.name == TRASH_DIR {
                continue;
            }
            let slot = folders.len();
            folders.push(FolderSummary {
                name: entry.name.clone(),
                path: path.clone(),
                child_count: 0,
            });
            let children = walk(fs, vault_root, &path, folders)?;
            folders[slot].child_count = children.len();
            nodes.push(Node::Folder(FolderNode {
                name: entry.name,
                path,
                children,
            }));
        } else if entry.is_file {
            nodes.push(Node::File(FileNode {
                name: entry.name,
                path,
            }));
        } else {
            tracing::debug!(path = %path.display(), "skipping special entry");
        }
    }
    Ok(nodes)
}
