//! Trash commands implementation: delete, trash, restore, purge.

use crate::cli::args::{DeleteArgs, PurgeArgs, RestoreArgs};
use crate::cli::output::{MessageResponse, Output};
use crate::cli::vault_path;
use crate::content::LoadedFile;
use crate::engine::{SoftDelete, VaultEngine};
use crate::error::Result;
use crate::paths::validate_name;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TrashEntry {
    pub name: String,
    pub path: String,
    pub bytes: usize,
}

impl From<&LoadedFile> for TrashEntry {
    fn from(file: &LoadedFile) -> Self {
        Self {
            name: file.name.clone(),
            path: file.path.display().to_string(),
            bytes: file.contents.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrashResponse {
    pub files: Vec<TrashEntry>,
    pub total: usize,
}

impl TrashResponse {
    fn from_files(files: &[LoadedFile]) -> Self {
        Self {
            files: files.iter().map(TrashEntry::from).collect(),
            total: files.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trash: Option<TrashResponse>,
}

// === delete ===

pub fn delete(engine: &VaultEngine, args: &DeleteArgs, output: &Output) -> Result<()> {
    let node = engine.node_at(&vault_path(engine, &args.path))?;
    let path = node.path().to_path_buf();

    let response = match engine.soft_delete(&node)? {
        SoftDelete::Trashed { trash, .. } => DeleteResponse {
            path: path.display().to_string(),
            message: "Moved to trash".to_string(),
            trash: Some(TrashResponse::from_files(&trash)),
        },
        SoftDelete::SkippedFolder => {
            output.warn("folders cannot be moved to the trash; use rmdir to delete them");
            DeleteResponse {
                path: path.display().to_string(),
                message: "Nothing to do".to_string(),
                trash: None,
            }
        }
    };
    output.print(&response)
}

// === trash ===

pub fn list(engine: &VaultEngine, output: &Output) -> Result<()> {
    let files = engine.list_trash()?;
    output.print(&TrashResponse::from_files(&files))
}

// === restore ===

pub fn restore(engine: &VaultEngine, args: &RestoreArgs, output: &Output) -> Result<()> {
    let restored = engine.restore(args.name.trim())?;
    output.print(&MessageResponse::new(&restored, "Restored to vault root"))
}

// === purge ===

pub fn purge(engine: &VaultEngine, args: &PurgeArgs, output: &Output) -> Result<()> {
    let name = args.name.trim();
    validate_name(name)?;
    let path = engine.paths().trash_root().join(name);
    engine.permanently_delete(&path)?;
    output.print(&MessageResponse::new(&path, "Permanently deleted"))
}
