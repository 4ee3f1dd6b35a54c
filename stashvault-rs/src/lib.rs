//! Stashvault - a local vault for code snippets and notes.
//!
//! # Overview
//!
//! All content lives in one directory tree under a single vault root. The
//! crate provides:
//! - A tree view of the vault (the reserved `backup` trash folder excluded)
//! - Saving snippets by name, extension and target folder
//! - Folder creation and removal
//! - A flat trash with soft delete, restore and permanent delete
//! - Recursive loading of file contents, tolerant of non-UTF-8 files
//!
//! # Example
//!
//! ```no_run
//! use stashvault::{SaveTarget, VaultEngine};
//!
//! let engine = VaultEngine::open("/path/to/vault");
//!
//! engine.create_folder("notes").unwrap();
//! engine
//!     .save_artifact("todo", ".md", &SaveTarget::Folder("notes".into()), "- [ ] ship")
//!     .unwrap();
//!
//! for node in engine.list_tree().unwrap().nodes {
//!     println!("{}", node.name());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod extension;
pub mod fs;
pub mod paths;
pub mod tree;
pub mod view;

// Re-export main types at crate root
pub use config::Config;
pub use content::{ContentStatus, LoadedFile};
pub use engine::{FolderOutcome, SavedArtifact, SoftDelete, VaultEngine};
pub use error::{Result, VaultError};
pub use fs::{FileSystem, StdFileSystem};
pub use paths::{SaveTarget, VaultPaths};
pub use tree::{FileNode, FolderNode, Node, Tree};
pub use view::{Draft, View, ViewState};
