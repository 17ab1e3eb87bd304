use clap::Args;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{io::Write, path::PathBuf};
use tracing::info;
use walkdir::WalkDir;

use gta_gxt2::Gxt2Table;

use crate::commands::{create, gxt2::load};

#[derive(Args)]
pub struct MergeArgs {
    /// An input directory, searched for `.gxt2` files
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// A target GXT2 file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl MergeArgs {
    pub fn handle(&self) -> Result<()> {
        let files = WalkDir::new(&self.directory)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("gxt2"))
            })
            .collect::<Vec<_>>();

        if files.is_empty() {
            return Err(miette!("no gxt2 files in {}", self.directory.display()));
        }

        let mut tables = Vec::with_capacity(files.len());
        for file in &files {
            info!("merging {}", file.path().display());
            tables.push(load(file.path())?);
        }

        let mut merged = Gxt2Table::new();
        merged.concat(&tables).context("merging tables")?;

        info!("creating {} with {} entries", self.file.display(), merged.len());
        create(&self.file, self.overwrite)?
            .write_all(merged.as_bytes())
            .into_diagnostic()
    }
}
