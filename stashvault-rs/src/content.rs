//! Recursive loading of file contents.
//!
//! Unlike the tree walk, nothing is excluded here: the same loader lists the
//! trash when pointed at the trash root.

use crate::error::{Result, VaultError};
use crate::fs::FileSystem;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// How a file's bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    /// Valid UTF-8, contents are exact.
    Text,
    /// Invalid UTF-8; bad sequences were replaced with U+FFFD.
    Lossy,
    /// The file could not be read at all; contents are empty.
    Unreadable,
}

/// A file together with its decoded contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedFile {
    pub name: String,
    pub path: PathBuf,
    pub contents: String,
    pub status: ContentStatus,
}

impl LoadedFile {
    /// Only exact text may be edited and saved back.
    pub fn is_editable(&self) -> bool {
        self.status == ContentStatus::Text
    }
}

/// Collect every file below `root`, depth-first, with its contents.
///
/// A file that cannot be read or decoded never aborts the listing; it is
/// returned with a non-[`ContentStatus::Text`] status instead. Failing to list a
/// directory does abort, with [`VaultError::TreeRead`].
pub fn load_all_files(fs: &impl FileSystem, root: &Path) -> Result<Vec<LoadedFile>> {
    let mut files = Vec::new();
    collect(fs, root, &mut files)?;
    Ok(files)
}

fn collect(fs: &impl FileSystem, dir: &Path, files: &mut Vec<LoadedFile>) -> Result<()> {
    let entries = fs
        .read_dir(dir)
        .map_err(|e| VaultError::tree_read(dir, e))?;

    for entry in entries {
        let path = dir.join(&entry.name);
        if entry.is_file {
            files.push(read_entry(fs, entry.name, path));
        } else if entry.is_dir {
            collect(fs, &path, files)?;
        }
    }
    Ok(())
}

fn read_entry(fs: &impl FileSystem, name: String, path: PathBuf) -> LoadedFile {
    match fs.read_bytes(&path) {
        Ok(bytes) => {
            let (contents, status) = decode(bytes);
            if status == ContentStatus::Lossy {
                tracing::warn!(path = %path.display(), "file is not valid UTF-8, loaded lossily");
            }
            LoadedFile {
                name,
                path,
                contents,
                status,
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read file");
            LoadedFile {
                name,
                path,
                contents: String::new(),
                status: ContentStatus::Unreadable,
            }
        }
    }
}

fn decode(bytes: Vec<u8>) -> (String, ContentStatus) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, ContentStatus::Text),
        Err(e) => (
            String::from_utf8_lossy(e.as_bytes()).into_owned(),
            ContentStatus::Lossy,
        ),
    }
}

/// Load a single file by its full path.
pub fn load_file(fs: &impl FileSystem, path: &Path) -> Result<LoadedFile> {
    if !fs.exists(path) {
        return Err(VaultError::NotFound(path.display().to_string()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| VaultError::NotFound(path.display().to_string()))?;
    let bytes = fs
        .read_bytes(path)
        .map_err(|e| VaultError::storage(path, e))?;
    let (contents, status) = decode(bytes);
    Ok(LoadedFile {
        name,
        path: path.to_path_buf(),
        contents,
        status,
    })
}

/// Find the first file below `root` whose name is exactly `name`.
///
/// Names are compared byte for byte, so two spellings of the same accented
/// character are different names. When several folders hold a file with the
/// same name, the first one in walk order wins; use [`load_file`] with a full
/// path to pick a specific one.
pub fn load_file_by_name(fs: &impl FileSystem, root: &Path, name: &str) -> Result<LoadedFile> {
    load_all_files(fs, root)?
        .into_iter()
        .find(|file| file.name == name)
        .ok_or_else(|| VaultError::NotFound(name.to_string()))
}
