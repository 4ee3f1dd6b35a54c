//! Filesystem capability used by the vault.
//!
//! The engine never touches `std::fs` directly; every read, write, copy and
//! removal goes through [`FileSystem`] so the primitives can be swapped out
//! (for example to inject failures in tests).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single entry returned by [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Last path segment of the entry.
    pub name: String,
    pub is_dir: bool,
    pub is_file: bool,
}

/// Primitive filesystem operations the vault is built on.
pub trait FileSystem {
    /// List the direct entries of `path`, in the order the platform returns them.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Read a file's raw bytes.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate `path` and write `text` to it.
    fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Copy `src` to `dst`, overwriting `dst` if it exists.
    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Remove a file or directory. Directories need `recursive` unless empty.
    fn remove(&self, path: &Path, recursive: bool) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a real directory. Links to directories are not.
    fn is_dir(&self, path: &Path) -> bool;

    /// Resolve `path` to an absolute path with every link followed.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Create a directory, including missing parents when `recursive` is set.
    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            // Links to files count as files; links to directories are never
            // descended into, so a link cycle cannot recurse forever.
            let (is_dir, is_file) = if file_type.is_symlink() {
                let is_file = fs::metadata(entry.path())
                    .map(|meta| meta.is_file())
                    .unwrap_or(false);
                (false, is_file)
            } else {
                (file_type.is_dir(), file_type.is_file())
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
                is_file,
            });
        }
        Ok(entries)
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        fs::copy(src, dst).map(|_| ())
    }

    fn remove(&self, path: &Path, recursive: bool) -> io::Result<()> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            if recursive {
                fs::remove_dir_all(path)
            } else {
                fs::remove_dir(path)
            }
        } else {
            fs::remove_file(path)
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
        if recursive {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        }
    }
}
