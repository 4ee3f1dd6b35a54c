//! Error types and exit codes for Stashvault.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const STORAGE_UNAVAILABLE: i32 = 3;
    pub const TREE_READ_ERROR: i32 = 4;
    pub const INVALID_INPUT: i32 = 5;
}

/// Main error type for vault operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// The vault root (or an entry below it) could not be created, written or removed.
    #[error("Storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory walk failed part way through.
    #[error("Failed to read tree at {path}: {source}")]
    TreeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unsupported extension: {0}")]
    UnknownExtension(String),

    #[error("Path is outside the vault: {0}")]
    OutsideVault(PathBuf),

    #[error("Already in the trash: {0}")]
    AlreadyInTrash(PathBuf),

    #[error("{0} is not valid text and cannot be edited")]
    NotEditable(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("No content provided")]
    NoContentProvided,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VaultError {
    /// Wrap an I/O failure on `path` as [`VaultError::StorageUnavailable`].
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VaultError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O failure on `path` as [`VaultError::TreeRead`].
    pub fn tree_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VaultError::TreeRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_name(name: &str, reason: &str) -> Self {
        VaultError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::NotFound(_) | VaultError::FolderNotFound(_) => exit_code::NOT_FOUND,
            VaultError::StorageUnavailable { .. } => exit_code::STORAGE_UNAVAILABLE,
            VaultError::TreeRead { .. } => exit_code::TREE_READ_ERROR,
            VaultError::InvalidName { .. }
            | VaultError::UnknownExtension(_)
            | VaultError::OutsideVault(_)
            | VaultError::AlreadyInTrash(_)
            | VaultError::NotEditable(_)
            | VaultError::NoContentProvided => exit_code::INVALID_INPUT,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
