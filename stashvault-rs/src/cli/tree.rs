//! Tree command implementation.

use crate::cli::output::Output;
use crate::engine::VaultEngine;
use crate::error::Result;
use crate::tree::{FolderSummary, Node};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub root: String,
    pub nodes: Vec<Node>,
    pub folders: Vec<FolderSummary>,
    pub total_files: usize,
}

pub fn run(engine: &VaultEngine, output: &Output) -> Result<()> {
    let tree = engine.list_tree()?;
    let total_files = tree.file_count();

    let response = TreeResponse {
        root: engine.root().display().to_string(),
        nodes: tree.nodes,
        folders: tree.folders,
        total_files,
    };
    output.print(&response)
}
