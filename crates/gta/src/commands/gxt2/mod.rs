use std::path::Path;

use gta_gxt2::Gxt2Table;
use miette::{Context, Result};

use crate::commands::open;

pub mod delete;
pub mod diff;
pub mod export;
pub mod get;
pub mod import;
pub mod merge;
pub mod set;

#[derive(clap::Subcommand)]
pub enum Gxt2Commands {
    /// Compare two GXT2 files
    Diff(diff::DiffArgs),
    /// Export a GXT2 file to JSON
    Export(export::ExportArgs),
    /// Create a GXT2 file from JSON
    Import(import::ImportArgs),
    /// Print entries of a GXT2 file
    Get(get::GetArgs),
    /// Add or replace an entry in a GXT2 file
    Set(set::SetArgs),
    /// Remove entries from a GXT2 file
    Delete(delete::DeleteArgs),
    /// Merge a directory of GXT2 files into one
    Merge(merge::MergeArgs),
}

impl Gxt2Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Gxt2Commands::Diff(diff) => diff.handle(),
            Gxt2Commands::Export(export) => export.handle(),
            Gxt2Commands::Import(import) => import.handle(),
            Gxt2Commands::Get(get) => get.handle(),
            Gxt2Commands::Set(set) => set.handle(),
            Gxt2Commands::Delete(delete) => delete.handle(),
            Gxt2Commands::Merge(merge) => merge.handle(),
        }
    }
}

pub(crate) fn load(path: &Path) -> Result<Gxt2Table> {
    Gxt2Table::read(open(path)?).context(format!("reading {}", path.display()))
}
