//! Seed import command
//!
//! Usage: picto seed import <PATH>

use std::path::PathBuf;

use clap::{Args, Subcommand};
use picto_store::errors::{io_error, Result};
use rusqlite::Connection;

use super::print_json;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file, or every .yaml/.yml file in a directory
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(args: SeedArgs, conn: &mut Connection) -> Result<()> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, conn),
    }
}

fn execute_import(args: ImportArgs, conn: &mut Connection) -> Result<()> {
    let seed_files = if args.path.is_dir() {
        // sorted so multi-file imports are deterministic
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)
            .map_err(|e| io_error("seed_import", e))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        let report = picto_engine::commands::seed::seed_import(conn, &seed_file)?;
        print_json(&report)?;
    }
    Ok(())
}
