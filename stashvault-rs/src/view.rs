//! Front-end view state, kept apart from the engine.
//!
//! The engine is stateless; anything a front end needs to remember between
//! calls (open folders, the text being edited, the chosen extension) lives in
//! [`ViewState`] and is passed to the engine explicitly.

use crate::content::LoadedFile;
use crate::engine::{FolderOutcome, SavedArtifact, VaultEngine};
use crate::error::{Result, VaultError};
use crate::extension::EXTENSIONS;
use crate::fs::FileSystem;
use crate::paths::SaveTarget;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Which pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Code,
    Recover,
}

/// The artifact being written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Name without extension.
    pub name: String,
    pub contents: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.contents.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contents.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Folders expanded in the tree, by path.
    pub open_folders: HashSet<PathBuf>,
    pub draft: Draft,
    /// Extension for the next save; empty means the engine default.
    pub extension: String,
    pub save_target: SaveTarget,
    pub view: View,
    /// Set when the draft came from a file that did not decode cleanly.
    pub read_only: bool,
    /// Pending input for "new folder".
    pub folder_name: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a folder between open and closed; returns the new state.
    pub fn toggle_folder(&mut self, path: &Path) -> bool {
        if self.open_folders.remove(path) {
            false
        } else {
            self.open_folders.insert(path.to_path_buf());
            true
        }
    }

    pub fn is_open(&self, path: &Path) -> bool {
        self.open_folders.contains(path)
    }

    /// Save the draft. The draft is cleared only if the write succeeds.
    pub fn save_draft<F: FileSystem>(&mut self, engine: &VaultEngine<F>) -> Result<SavedArtifact> {
        if self.read_only {
            return Err(VaultError::NotEditable(self.draft.name.clone()));
        }
        let saved = engine.save_artifact(
            &self.draft.name,
            &self.extension,
            &self.save_target,
            &self.draft.contents,
        )?;
        self.draft.clear();
        Ok(saved)
    }

    /// Load a file into the draft and switch to the code view.
    ///
    /// A known extension is split off into [`ViewState::extension`] so saving
    /// again writes back to the same name.
    pub fn open_file<F: FileSystem>(&mut self, engine: &VaultEngine<F>, path: &Path) -> Result<LoadedFile> {
        let file = engine.load_file(path)?;
        let (stem, extension) = split_known_extension(&file.name);

        self.draft = Draft::new(stem, file.contents.clone());
        self.extension = extension.to_string();
        self.read_only = !file.is_editable();
        self.view = View::Code;
        Ok(file)
    }

    /// Create the folder named in [`ViewState::folder_name`], clearing the input when it is new.
    pub fn create_folder<F: FileSystem>(&mut self, engine: &VaultEngine<F>) -> Result<FolderOutcome> {
        let outcome = engine.create_folder(self.folder_name.trim())?;
        if matches!(outcome, FolderOutcome::Created(_)) {
            self.folder_name.clear();
        }
        Ok(outcome)
    }

    /// Switch to the recover view and return the trash listing.
    pub fn show_trash<F: FileSystem>(&mut self, engine: &VaultEngine<F>) -> Result<Vec<LoadedFile>> {
        let trash = engine.list_trash()?;
        self.view = View::Recover;
        Ok(trash)
    }
}

fn split_known_extension(name: &str) -> (&str, &str) {
    if let Some(dot) = name.rfind('.') {
        let ext = &name[dot..];
        if dot > 0 && EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            return (&name[..dot], ext);
        }
    }
    (name, "")
}
