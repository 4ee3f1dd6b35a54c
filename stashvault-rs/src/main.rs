//! Stashvault CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use stashvault::cli::args::{Cli, Commands};
use stashvault::cli::output::Output;
use stashvault::cli::{extensions, folder, save, show, trash, tree};
use stashvault::config::Config;
use stashvault::engine::VaultEngine;
use stashvault::error::{exit_code, VaultError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(config: &Config, verbose: u8) {
    let fallback = match verbose {
        0 => config.log_level.as_str(),
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), VaultError> {
    // Load config
    let config = Config::load()?;
    init_tracing(&config, cli.verbose);

    // Resolve vault path
    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let engine = VaultEngine::open(vault_path).with_default_extension(&config.default_extension)?;

    // Create output helper
    let output = Output::new(cli.output_format(), cli.quiet);

    // Dispatch command
    match &cli.command {
        Commands::Tree => tree::run(&engine, &output)?,
        Commands::Mkdir(args) => folder::mkdir(&engine, args, &output)?,
        Commands::Rmdir(args) => folder::rmdir(&engine, args, &output)?,
        Commands::Save(args) => save::run(&engine, args, &output)?,
        Commands::Show(args) => show::run(&engine, args, &output)?,
        Commands::Delete(args) => trash::delete(&engine, args, &output)?,
        Commands::Trash => trash::list(&engine, &output)?,
        Commands::Restore(args) => trash::restore(&engine, args, &output)?,
        Commands::Purge(args) => trash::purge(&engine, args, &output)?,
        Commands::Extensions => extensions::run(&engine, &output)?,
    }
    Ok(())
}
