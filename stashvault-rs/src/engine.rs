//! The vault engine: every operation on the vault goes through here.
//!
//! The engine keeps no state between calls besides where the vault lives. The
//! directory tree on disk is the only source of truth and every listing walks
//! it again from scratch.

use crate::content::{self, LoadedFile};
use crate::error::{Result, VaultError};
use crate::extension::{resolve_extension, DEFAULT_EXTENSION};
use crate::fs::{FileSystem, StdFileSystem};
use crate::paths::{validate_name, validate_root_folder_name, SaveTarget, VaultPaths};
use crate::tree::{self, FileNode, FolderNode, Node, Tree};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of [`VaultEngine::create_folder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum FolderOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// A file written by [`VaultEngine::save_artifact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedArtifact {
    /// File name including extension.
    pub name: String,
    pub path: PathBuf,
}

/// Outcome of [`VaultEngine::soft_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoftDelete {
    /// The file now lives at `trashed_to`; `trash` is the updated trash listing.
    Trashed {
        trashed_to: PathBuf,
        trash: Vec<LoadedFile>,
    },
    /// Folders cannot be trashed; nothing happened.
    SkippedFolder,
}

/// Orchestrates the path resolver, tree reader and content loader over a
/// [`FileSystem`].
#[derive(Debug, Clone)]
pub struct VaultEngine<F: FileSystem = StdFileSystem> {
    fs: F,
    paths: VaultPaths,
    default_extension: &'static str,
}

impl VaultEngine<StdFileSystem> {
    /// Open the vault at `root` on the local disk. Nothing is created yet.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(StdFileSystem, root)
    }
}

impl<F: FileSystem> VaultEngine<F> {
    pub fn with_fs(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            paths: VaultPaths::new(root),
            default_extension: DEFAULT_EXTENSION,
        }
    }

    /// Use `extension` for saves that name none.
    pub fn with_default_extension(mut self, extension: &str) -> Result<Self> {
        self.default_extension = resolve_extension(extension, DEFAULT_EXTENSION)?;
        Ok(self)
    }

    /// Extension applied when a save names none.
    pub fn default_extension(&self) -> &'static str {
        self.default_extension
    }

    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Spell `path` the way the vault root is spelled.
    ///
    /// Relative paths are taken from the working directory. A path that only
    /// reaches the vault through a link is rewritten under the root, so a
    /// linked vault still recognises its own entries.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if self.paths.is_inside_vault(&absolute) {
            return absolute;
        }
        // Only the parent is resolved; the entry itself may be a link
        let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) else {
            return absolute;
        };
        match (self.fs.canonicalize(self.root()), self.fs.canonicalize(parent)) {
            (Ok(root), Ok(parent)) => match parent.join(name).strip_prefix(&root) {
                Ok(rest) if rest.as_os_str().is_empty() => self.root().to_path_buf(),
                Ok(rest) => self.root().join(rest),
                Err(_) => absolute,
            },
            _ => absolute,
        }
    }

    /// The tree node for an existing entry at `path`.
    pub fn node_at(&self, path: &Path) -> Result<Node> {
        let path = self.resolve_path(path);
        if !self.fs.exists(&path) {
            return Err(VaultError::NotFound(path.display().to_string()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.fs.is_dir(&path) {
            Ok(Node::Folder(FolderNode {
                name,
                path,
                children: Vec::new(),
            }))
        } else {
            Ok(Node::File(FileNode::new(name, path)))
        }
    }

    fn ensure_root(&self) -> Result<&Path> {
        self.paths.vault_root(&self.fs)
    }

    fn ensure_trash(&self) -> Result<PathBuf> {
        self.ensure_root()?;
        let trash = self.paths.trash_root();
        if !self.fs.exists(&trash) {
            debug!(trash = %trash.display(), "creating trash folder");
            self.fs
                .create_dir(&trash, true)
                .map_err(|e| VaultError::storage(&trash, e))?;
        }
        Ok(trash)
    }

    /// The current folder/file tree, trash excluded.
    pub fn list_tree(&self) -> Result<Tree> {
        let root = self.ensure_root()?;
        tree::build_tree(&self.fs, root, root)
    }

    /// Create a folder directly under the vault root.
    ///
    /// Does nothing if something with that name already exists.
    pub fn create_folder(&self, name: &str) -> Result<FolderOutcome> {
        validate_root_folder_name(name)?;
        let root = self.ensure_root()?;
        let path = root.join(name);

        if self.fs.exists(&path) {
            debug!(path = %path.display(), "folder already exists");
            return Ok(FolderOutcome::AlreadyExists(path));
        }

        self.fs
            .create_dir(&path, true)
            .map_err(|e| VaultError::storage(&path, e))?;
        info!(path = %path.display(), "created folder");
        Ok(FolderOutcome::Created(path))
    }

    /// Recursively delete a folder and everything in it. This bypasses the trash.
    ///
    /// Only directories are accepted; files have to go through
    /// [`VaultEngine::soft_delete`].
    pub fn remove_folder(&self, path: &Path) -> Result<()> {
        let path = self.resolve_path(path);
        let path = path.as_path();
        if self.paths.is_trash_root(path) || self.paths.is_inside_trash(path) {
            return Err(VaultError::AlreadyInTrash(path.to_path_buf()));
        }
        if !self.paths.is_inside_vault(path) {
            return Err(VaultError::OutsideVault(path.to_path_buf()));
        }
        if !self.fs.is_dir(path) {
            return Err(VaultError::FolderNotFound(path.display().to_string()));
        }

        self.fs
            .remove(path, true)
            .map_err(|e| VaultError::storage(path, e))?;
        info!(path = %path.display(), "removed folder");
        Ok(())
    }

    /// Write `contents` to `name + extension` inside `target`.
    ///
    /// An empty `extension` means the default one. An existing file at the
    /// destination is overwritten.
    pub fn save_artifact(
        &self,
        name: &str,
        extension: &str,
        target: &SaveTarget,
        contents: &str,
    ) -> Result<SavedArtifact> {
        validate_name(name)?;
        let extension = resolve_extension(extension, self.default_extension)?;
        self.ensure_root()?;

        if let SaveTarget::Folder(folder) = target {
            validate_root_folder_name(folder)?;
            if !self.fs.exists(&self.paths.root().join(folder)) {
                return Err(VaultError::FolderNotFound(folder.clone()));
            }
        }

        let path = self.paths.resolve_save_path(target, name, extension);
        self.fs
            .write_text(&path, contents)
            .map_err(|e| VaultError::storage(&path, e))?;
        info!(path = %path.display(), bytes = contents.len(), "saved artifact");

        Ok(SavedArtifact {
            name: format!("{}{}", name, extension),
            path,
        })
    }

    /// Move a tree node to the trash. Folders are skipped.
    pub fn soft_delete(&self, node: &Node) -> Result<SoftDelete> {
        match node {
            Node::File(file) => self.soft_delete_file(file),
            Node::Folder(folder) => {
                // The trash is prepared even when nothing ends up in it
                self.ensure_trash()?;
                debug!(path = %folder.path.display(), "soft delete skipped for folder");
                Ok(SoftDelete::SkippedFolder)
            }
        }
    }

    /// Move a file to the trash.
    ///
    /// The file lands directly under the trash root by its base name, replacing
    /// any earlier trashed file of that name. The copy is made before the
    /// original is removed, so an interruption leaves a duplicate, never a loss.
    pub fn soft_delete_file(&self, file: &FileNode) -> Result<SoftDelete> {
        let path = self.resolve_path(&file.path);
        if self.paths.is_inside_trash(&path) {
            return Err(VaultError::AlreadyInTrash(path));
        }
        if !self.paths.is_inside_vault(&path) {
            return Err(VaultError::OutsideVault(path));
        }
        let trash = self.ensure_trash()?;
        if !self.fs.exists(&path) {
            return Err(VaultError::NotFound(path.display().to_string()));
        }

        let trashed_to = trash.join(base_name(&file.name)?);

        debug!(from = %path.display(), to = %trashed_to.display(), "copying to trash");
        self.fs
            .copy_file(&path, &trashed_to)
            .map_err(|e| VaultError::storage(&trashed_to, e))?;
        self.fs
            .remove(&path, false)
            .map_err(|e| VaultError::storage(&path, e))?;
        info!(path = %path.display(), "moved file to trash");

        Ok(SoftDelete::Trashed {
            trashed_to,
            trash: self.list_trash()?,
        })
    }

    /// Move a trashed file back to the vault root.
    ///
    /// The original folder is not remembered, so the file always comes back
    /// at the root, overwriting any file of the same name there.
    pub fn restore(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        let root = self.ensure_root()?;
        let trashed = self.paths.trash_root().join(name);
        if !self.fs.exists(&trashed) {
            return Err(VaultError::NotFound(name.to_string()));
        }

        let restored = root.join(name);
        debug!(from = %trashed.display(), to = %restored.display(), "copying out of trash");
        self.fs
            .copy_file(&trashed, &restored)
            .map_err(|e| VaultError::storage(&restored, e))?;
        self.fs
            .remove(&trashed, false)
            .map_err(|e| VaultError::storage(&trashed, e))?;
        info!(path = %restored.display(), "restored file");

        Ok(restored)
    }

    /// Irreversibly remove an entry from the trash.
    pub fn permanently_delete(&self, path: &Path) -> Result<()> {
        let path = self.resolve_path(path);
        let path = path.as_path();
        if !self.paths.is_inside_trash(path) {
            return Err(VaultError::OutsideVault(path.to_path_buf()));
        }
        if !self.fs.exists(path) {
            return Err(VaultError::NotFound(path.display().to_string()));
        }

        self.fs
            .remove(path, true)
            .map_err(|e| VaultError::storage(path, e))?;
        info!(path = %path.display(), "permanently deleted");
        Ok(())
    }

    /// Everything currently in the trash, with contents.
    pub fn list_trash(&self) -> Result<Vec<LoadedFile>> {
        let trash = self.ensure_trash()?;
        content::load_all_files(&self.fs, &trash)
    }

    /// Load one file by its full path.
    pub fn load_file(&self, path: &Path) -> Result<LoadedFile> {
        let path = self.resolve_path(path);
        if !self.paths.is_inside_vault(&path) {
            return Err(VaultError::OutsideVault(path));
        }
        content::load_file(&self.fs, &path)
    }

    /// Load the first file anywhere in the vault named `name`.
    ///
    /// The trash is searched like any other folder and walk order decides
    /// between duplicates. Use [`VaultEngine::load_file`] to be precise.
    pub fn load_file_by_name(&self, name: &str) -> Result<LoadedFile> {
        let root = self.ensure_root()?;
        content::load_file_by_name(&self.fs, root, name)
    }

    /// Every file in the vault (trash included) with its contents.
    pub fn load_all_files(&self) -> Result<Vec<LoadedFile>> {
        let root = self.ensure_root()?;
        content::load_all_files(&self.fs, root)
    }
}

fn base_name(name: &str) -> Result<&str> {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| VaultError::invalid_name(name, "no file name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::testing::FlakyFs;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_vault() -> (TempDir, VaultEngine) {
        let dir = TempDir::new().unwrap();
        let engine = VaultEngine::open(dir.path().join("vault"));
        (dir, engine)
    }

    fn trash_names(engine: &VaultEngine) -> Vec<String> {
        let mut names: Vec<String> = engine
            .list_trash()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_list_tree_creates_root() {
        let (_dir, engine) = setup_test_vault();
        assert!(!engine.root().exists());

        let tree = engine.list_tree().unwrap();
        assert!(tree.nodes.is_empty());
        assert!(engine.root().is_dir());
    }

    #[test]
    fn test_save_to_root_and_load() {
        let (_dir, engine) = setup_test_vault();

        let saved = engine
            .save_artifact("hello", ".md", &SaveTarget::Root, "# Hi")
            .unwrap();
        assert_eq!(saved.name, "hello.md");
        assert_eq!(saved.path, engine.root().join("hello.md"));

        let tree = engine.list_tree().unwrap();
        assert_eq!(tree.nodes.len(), 1);
        assert!(matches!(tree.get("hello.md"), Some(Node::File(_))));

        let loaded = engine.load_file_by_name("hello.md").unwrap();
        assert_eq!(loaded.contents, "# Hi");
    }

    #[test]
    fn test_save_into_folder() {
        let (_dir, engine) = setup_test_vault();

        engine.create_folder("notes").unwrap();
        engine
            .save_artifact("x", ".txt", &SaveTarget::Folder("notes".into()), "body")
            .unwrap();

        let tree = engine.list_tree().unwrap();
        let notes = tree.get("notes").and_then(Node::as_folder).unwrap();
        assert_eq!(notes.children.len(), 1);
        assert_eq!(notes.children[0].name(), "x.txt");
    }

    #[test]
    fn test_save_default_extension() {
        let (_dir, engine) = setup_test_vault();
        let saved = engine.save_artifact("plain", "", &SaveTarget::Root, "p").unwrap();
        assert_eq!(saved.name, "plain.txt");

        let engine = engine.with_default_extension("md").unwrap();
        let saved = engine.save_artifact("other", "", &SaveTarget::Root, "o").unwrap();
        assert_eq!(saved.name, "other.md");
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, engine) = setup_test_vault();
        engine.save_artifact("a", ".txt", &SaveTarget::Root, "one").unwrap();
        engine.save_artifact("a", ".txt", &SaveTarget::Root, "two").unwrap();

        let loaded = engine.load_file(&engine.root().join("a.txt")).unwrap();
        assert_eq!(loaded.contents, "two");
    }

    #[test]
    fn test_save_rejects_bad_input() {
        let (_dir, engine) = setup_test_vault();

        let result = engine.save_artifact("", ".txt", &SaveTarget::Root, "x");
        assert!(matches!(result, Err(VaultError::InvalidName { .. })));

        let result = engine.save_artifact("a", ".exe", &SaveTarget::Root, "x");
        assert!(matches!(result, Err(VaultError::UnknownExtension(_))));

        let result = engine.save_artifact("a", ".txt", &SaveTarget::Folder("missing".into()), "x");
        assert!(matches!(result, Err(VaultError::FolderNotFound(_))));

        let result = engine.save_artifact("a", ".txt", &SaveTarget::Folder("backup".into()), "x");
        assert!(matches!(result, Err(VaultError::InvalidName { .. })));
    }

    #[test]
    fn test_create_folder_is_idempotent() {
        let (_dir, engine) = setup_test_vault();

        let first = engine.create_folder("notes").unwrap();
        assert_eq!(first, FolderOutcome::Created(engine.root().join("notes")));

        engine
            .save_artifact("keep", ".md", &SaveTarget::Folder("notes".into()), "k")
            .unwrap();

        let second = engine.create_folder("notes").unwrap();
        assert_eq!(second, FolderOutcome::AlreadyExists(engine.root().join("notes")));

        // Contents survive the second call
        assert!(engine.root().join("notes/keep.md").is_file());
    }

    #[test]
    fn test_create_folder_rejects_reserved() {
        let (_dir, engine) = setup_test_vault();
        assert!(engine.create_folder("backup").is_err());
        assert!(engine.create_folder("").is_err());
        assert!(engine.create_folder("a/b").is_err());
    }

    #[test]
    fn test_remove_folder_recursive() {
        let (_dir, engine) = setup_test_vault();
        engine.create_folder("notes").unwrap();
        engine
            .save_artifact("x", ".txt", &SaveTarget::Folder("notes".into()), "x")
            .unwrap();

        engine.remove_folder(&engine.root().join("notes")).unwrap();
        assert!(engine.list_tree().unwrap().nodes.is_empty());
        // Folder removal does not go through the trash
        assert!(engine.list_trash().unwrap().is_empty());
    }

    #[test]
    fn test_remove_folder_guards() {
        let (dir, engine) = setup_test_vault();
        engine.list_trash().unwrap();

        assert!(matches!(
            engine.remove_folder(engine.root()),
            Err(VaultError::OutsideVault(_))
        ));
        assert!(matches!(
            engine.remove_folder(&dir.path().join("elsewhere")),
            Err(VaultError::OutsideVault(_))
        ));
        assert!(matches!(
            engine.remove_folder(&engine.paths().trash_root()),
            Err(VaultError::AlreadyInTrash(_))
        ));
        assert!(matches!(
            engine.remove_folder(&engine.root().join("ghost")),
            Err(VaultError::FolderNotFound(_))
        ));
    }

    #[test]
    fn test_remove_folder_refuses_files() {
        let (_dir, engine) = setup_test_vault();
        let saved = engine.save_artifact("keep", ".md", &SaveTarget::Root, "keep").unwrap();

        let result = engine.remove_folder(&saved.path);
        assert!(matches!(result, Err(VaultError::FolderNotFound(_))));
        assert_eq!(fs::read_to_string(&saved.path).unwrap(), "keep");
        assert!(engine.list_trash().unwrap().is_empty());
    }

    #[test]
    fn test_node_at() {
        let (_dir, engine) = setup_test_vault();
        engine.create_folder("notes").unwrap();
        let saved = engine.save_artifact("a", ".txt", &SaveTarget::Root, "a").unwrap();

        let folder = engine.node_at(&engine.root().join("notes")).unwrap();
        assert_eq!(folder.as_folder().map(|f| f.name.as_str()), Some("notes"));

        let file = engine.node_at(&saved.path).unwrap();
        assert_eq!(file.as_file().map(|f| f.name.as_str()), Some("a.txt"));

        assert!(matches!(
            engine.node_at(&engine.root().join("ghost")),
            Err(VaultError::NotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_linked_vault_recognises_its_files() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let engine = VaultEngine::open(&link);
        let saved = engine.save_artifact("x", ".txt", &SaveTarget::Root, "x").unwrap();

        // Same file, spelled through the real directory
        let through_real = real.join("x.txt");
        assert_eq!(engine.resolve_path(&through_real), saved.path);
        engine
            .soft_delete_file(&FileNode::new("x.txt", &through_real))
            .unwrap();
        assert!(!through_real.exists());
        assert_eq!(trash_names(&engine), vec!["x.txt"]);
    }

    #[test]
    fn test_soft_delete_and_restore_round_trip() {
        let (_dir, engine) = setup_test_vault();
        engine.create_folder("notes").unwrap();
        let saved = engine
            .save_artifact("x", ".txt", &SaveTarget::Folder("notes".into()), "body")
            .unwrap();

        let outcome = engine
            .soft_delete_file(&FileNode::new("x.txt", &saved.path))
            .unwrap();
        match outcome {
            SoftDelete::Trashed { trashed_to, trash } => {
                assert_eq!(trashed_to, engine.paths().trash_root().join("x.txt"));
                assert_eq!(trash.len(), 1);
                assert_eq!(trash[0].contents, "body");
            }
            SoftDelete::SkippedFolder => panic!("file was skipped"),
        }

        let tree = engine.list_tree().unwrap();
        let notes = tree.get("notes").and_then(Node::as_folder).unwrap();
        assert!(notes.children.is_empty());
        assert_eq!(trash_names(&engine), vec!["x.txt"]);

        let restored = engine.restore("x.txt").unwrap();
        assert_eq!(restored, engine.root().join("x.txt"));

        // Back at the root, not in "notes"
        let tree = engine.list_tree().unwrap();
        assert!(matches!(tree.get("x.txt"), Some(Node::File(_))));
        assert!(trash_names(&engine).is_empty());
        assert_eq!(
            engine.load_file(&restored).unwrap().contents,
            "body"
        );
    }

    #[test]
    fn test_soft_delete_same_name_last_wins() {
        let (_dir, engine) = setup_test_vault();
        engine.create_folder("a").unwrap();
        engine.create_folder("b").unwrap();
        let first = engine
            .save_artifact("dup", ".md", &SaveTarget::Folder("a".into()), "first")
            .unwrap();
        let second = engine
            .save_artifact("dup", ".md", &SaveTarget::Folder("b".into()), "second")
            .unwrap();

        engine.soft_delete_file(&FileNode::new("dup.md", &first.path)).unwrap();
        engine.soft_delete_file(&FileNode::new("dup.md", &second.path)).unwrap();

        let trash = engine.list_trash().unwrap();
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].contents, "second");
    }

    #[test]
    fn test_soft_delete_folder_is_noop() {
        let (_dir, engine) = setup_test_vault();
        engine.create_folder("notes").unwrap();

        let tree = engine.list_tree().unwrap();
        let folder = tree.get("notes").unwrap();
        let outcome = engine.soft_delete(folder).unwrap();

        assert_eq!(outcome, SoftDelete::SkippedFolder);
        assert!(engine.root().join("notes").is_dir());
        assert!(engine.paths().trash_root().is_dir());
    }

    #[test]
    fn test_soft_delete_uses_base_name() {
        let (_dir, engine) = setup_test_vault();
        let saved = engine.save_artifact("n", ".txt", &SaveTarget::Root, "n").unwrap();

        engine
            .soft_delete_file(&FileNode::new("some/dir/n.txt", &saved.path))
            .unwrap();
        assert_eq!(trash_names(&engine), vec!["n.txt"]);
    }

    #[test]
    fn test_soft_delete_trashed_file_rejected() {
        let (_dir, engine) = setup_test_vault();
        let saved = engine.save_artifact("t", ".txt", &SaveTarget::Root, "t").unwrap();
        engine.soft_delete_file(&FileNode::new("t.txt", &saved.path)).unwrap();

        let trashed = engine.paths().trash_root().join("t.txt");
        let result = engine.soft_delete_file(&FileNode::new("t.txt", &trashed));
        assert!(matches!(result, Err(VaultError::AlreadyInTrash(_))));
        assert!(trashed.is_file());
    }

    #[test]
    fn test_interrupted_soft_delete_keeps_both_copies() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("vault");
        let healthy = VaultEngine::open(&root);
        let saved = healthy.save_artifact("keep", ".md", &SaveTarget::Root, "data").unwrap();

        let flaky = VaultEngine::with_fs(
            FlakyFs {
                fail_remove: true,
                ..FlakyFs::default()
            },
            &root,
        );
        let result = flaky.soft_delete_file(&FileNode::new("keep.md", &saved.path));
        assert!(matches!(result, Err(VaultError::StorageUnavailable { .. })));

        // Duplicate rather than loss
        assert_eq!(fs::read_to_string(&saved.path).unwrap(), "data");
        assert_eq!(
            fs::read_to_string(root.join("backup/keep.md")).unwrap(),
            "data"
        );
    }

    #[test]
    fn test_interrupted_restore_keeps_both_copies() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("vault");
        let healthy = VaultEngine::open(&root);
        let saved = healthy.save_artifact("back", ".md", &SaveTarget::Root, "data").unwrap();
        healthy.soft_delete_file(&FileNode::new("back.md", &saved.path)).unwrap();

        let flaky = VaultEngine::with_fs(
            FlakyFs {
                fail_remove: true,
                ..FlakyFs::default()
            },
            &root,
        );
        let result = flaky.restore("back.md");
        assert!(matches!(result, Err(VaultError::StorageUnavailable { .. })));

        assert_eq!(fs::read_to_string(root.join("back.md")).unwrap(), "data");
        assert_eq!(
            fs::read_to_string(root.join("backup/back.md")).unwrap(),
            "data"
        );
    }

    #[test]
    fn test_unavailable_root() {
        let dir = TempDir::new().unwrap();
        let engine = VaultEngine::with_fs(
            FlakyFs {
                fail_create_dir: true,
                ..FlakyFs::default()
            },
            dir.path().join("never"),
        );
        assert!(matches!(
            engine.list_tree(),
            Err(VaultError::StorageUnavailable { .. })
        ));
        assert!(matches!(
            engine.create_folder("x"),
            Err(VaultError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_restore_missing() {
        let (_dir, engine) = setup_test_vault();
        assert!(matches!(
            engine.restore("ghost.txt"),
            Err(VaultError::NotFound(_))
        ));
    }

    #[test]
    fn test_permanently_delete() {
        let (_dir, engine) = setup_test_vault();
        let saved = engine.save_artifact("gone", ".txt", &SaveTarget::Root, "g").unwrap();
        engine.soft_delete_file(&FileNode::new("gone.txt", &saved.path)).unwrap();

        let trashed = engine.paths().trash_root().join("gone.txt");
        engine.permanently_delete(&trashed).unwrap();

        assert!(engine.list_trash().unwrap().is_empty());
        assert!(matches!(
            engine.restore("gone.txt"),
            Err(VaultError::NotFound(_))
        ));
        assert!(engine.list_tree().unwrap().nodes.is_empty());
    }

    #[test]
    fn test_permanently_delete_only_in_trash() {
        let (_dir, engine) = setup_test_vault();
        let saved = engine.save_artifact("live", ".txt", &SaveTarget::Root, "l").unwrap();

        let result = engine.permanently_delete(&saved.path);
        assert!(matches!(result, Err(VaultError::OutsideVault(_))));
        assert!(saved.path.is_file());

        let result = engine.permanently_delete(&engine.paths().trash_root());
        assert!(matches!(result, Err(VaultError::OutsideVault(_))));
    }

    #[test]
    fn test_list_trash_creates_trash() {
        let (_dir, engine) = setup_test_vault();
        assert!(engine.list_trash().unwrap().is_empty());
        assert!(engine.paths().trash_root().is_dir());
        // And it stays hidden from the tree
        assert!(engine.list_tree().unwrap().nodes.is_empty());
    }

    #[test]
    fn test_load_file_outside_vault() {
        let (dir, engine) = setup_test_vault();
        let outside = dir.path().join("outside.txt");
        fs::write(&outside, "x").unwrap();
        assert!(matches!(
            engine.load_file(&outside),
            Err(VaultError::OutsideVault(_))
        ));
    }
}
