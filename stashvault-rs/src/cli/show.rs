//! Show command implementation.

use crate::cli::args::ShowArgs;
use crate::cli::output::Output;
use crate::cli::vault_path;
use crate::content::ContentStatus;
use crate::engine::VaultEngine;
use crate::error::{Result, VaultError};

pub fn run(engine: &VaultEngine, args: &ShowArgs, output: &Output) -> Result<()> {
    let file = match (&args.path, &args.name) {
        (Some(path), _) => engine.load_file(&vault_path(engine, path))?,
        (None, Some(name)) => engine.load_file_by_name(name.trim())?,
        (None, None) => return Err(VaultError::NotFound(String::new())),
    };

    if file.status != ContentStatus::Text {
        output.warn(&format!(
            "{} is not valid UTF-8 text; showing a lossy rendering",
            file.path.display()
        ));
    }

    if args.raw {
        output.print_raw(&file.contents);
        Ok(())
    } else {
        output.print(&file)
    }
}
