//! Extensions command implementation.

use crate::cli::output::Output;
use crate::engine::VaultEngine;
use crate::error::Result;
use crate::extension::EXTENSIONS;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExtensionsResponse {
    pub default: &'static str,
    pub extensions: &'static [&'static str],
}

pub fn run(engine: &VaultEngine, output: &Output) -> Result<()> {
    output.print(&ExtensionsResponse {
        default: engine.default_extension(),
        extensions: EXTENSIONS,
    })
}
