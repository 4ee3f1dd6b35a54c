//! Folder commands implementation.

use crate::cli::args::{MkdirArgs, RmdirArgs};
use crate::cli::output::{MessageResponse, Output};
use crate::cli::vault_path;
use crate::engine::{FolderOutcome, VaultEngine};
use crate::error::Result;

// === mkdir ===

pub fn mkdir(engine: &VaultEngine, args: &MkdirArgs, output: &Output) -> Result<()> {
    let response = match engine.create_folder(args.name.trim())? {
        FolderOutcome::Created(path) => MessageResponse::new(&path, "Folder created"),
        FolderOutcome::AlreadyExists(path) => {
            output.info("Folder already exists, nothing to do");
            MessageResponse::new(&path, "Folder already exists")
        }
    };
    output.print(&response)
}

// === rmdir ===

pub fn rmdir(engine: &VaultEngine, args: &RmdirArgs, output: &Output) -> Result<()> {
    let path = vault_path(engine, &args.path);
    engine.remove_folder(&path)?;
    output.print(&MessageResponse::new(&path, "Folder deleted"))
}
