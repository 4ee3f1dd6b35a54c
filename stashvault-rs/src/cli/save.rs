//! Save command implementation.

use crate::cli::args::SaveArgs;
use crate::cli::output::Output;
use crate::engine::VaultEngine;
use crate::error::{Result, VaultError};
use crate::paths::SaveTarget;
use crate::view::{Draft, ViewState};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub name: String,
    pub path: String,
    pub message: String,
}

/// Read content from args (--content, --file, or stdin).
fn read_input_content(content_arg: &Option<String>, file_arg: &Option<PathBuf>) -> Result<String> {
    if let Some(content) = content_arg {
        // Unescape newlines
        Ok(content.replace("\\n", "\n"))
    } else if let Some(path) = file_arg {
        Ok(std::fs::read_to_string(path)?)
    } else if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Err(VaultError::NoContentProvided)
    }
}

pub fn run(engine: &VaultEngine, args: &SaveArgs, output: &Output) -> Result<()> {
    let contents = read_input_content(&args.content, &args.file)?;

    let mut state = ViewState {
        draft: Draft::new(args.name.trim(), contents),
        extension: args.ext.clone(),
        save_target: SaveTarget::from_folder(args.folder.as_deref()),
        ..ViewState::default()
    };
    let saved = state.save_draft(engine)?;

    let response = SaveResponse {
        name: saved.name,
        path: saved.path.display().to_string(),
        message: "Snippet saved".to_string(),
    };
    output.print(&response)
}
