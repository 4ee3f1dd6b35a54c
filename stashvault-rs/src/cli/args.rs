//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stashvault")]
#[command(author, version, about = "A local vault for code snippets and notes", long_about = None)]
pub struct Cli {
    /// Path to the vault root (overrides config and the default data directory)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the folder/file tree (trash excluded)
    Tree,

    /// Create a folder under the vault root
    Mkdir(MkdirArgs),

    /// Delete a folder and everything in it (bypasses the trash)
    Rmdir(RmdirArgs),

    /// Save a snippet
    Save(SaveArgs),

    /// Print a snippet's contents
    Show(ShowArgs),

    /// Move a file to the trash
    Delete(DeleteArgs),

    /// List the trash
    Trash,

    /// Move a file out of the trash, back to the vault root
    Restore(RestoreArgs),

    /// Permanently delete a file from the trash
    Purge(PurgeArgs),

    /// List the supported extensions
    Extensions,
}

#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Folder name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct RmdirArgs {
    /// Folder path, absolute or relative to the vault root
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Snippet name, without extension
    pub name: String,

    /// Extension (e.g. ".rs" or "rs"); defaults to the configured default
    #[arg(short, long, default_value = "")]
    pub ext: String,

    /// Folder under the vault root to save into (default: the root)
    #[arg(long)]
    pub folder: Option<String>,

    /// Snippet text (use \n for newlines)
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the snippet text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// File name to look up (first match wins)
    #[arg(required_unless_present = "path")]
    pub name: Option<String>,

    /// Exact file path, absolute or relative to the vault root
    #[arg(long, conflicts_with = "name")]
    pub path: Option<PathBuf>,

    /// Print only the contents instead of a structured record
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// File path, absolute or relative to the vault root
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Name of the trashed file
    pub name: String,
}

#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Name of the trashed file
    pub name: String,
}
