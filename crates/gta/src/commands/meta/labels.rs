use clap::Args;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{collections::BTreeMap, path::PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use gta_meta::labels_from_meta;

use crate::commands::{gxt2::load, write_json};

#[derive(Args)]
pub struct LabelsArgs {
    /// A GXT2 file whose hashes are looked up
    #[arg(short, long, value_name = "FILE")]
    table: PathBuf,

    /// Metadata files, or directories searched for `.meta` files
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// A target JSON file, stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl LabelsArgs {
    pub fn handle(&self) -> Result<()> {
        let table = load(&self.table)?;

        let files = self
            .paths
            .iter()
            .flat_map(|path| {
                WalkDir::new(path)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .filter(|e| {
                        e.depth() == 0
                            || e.path()
                                .extension()
                                .is_some_and(|ext| ext.eq_ignore_ascii_case("meta"))
                    })
            })
            .collect::<Vec<_>>();

        if files.is_empty() {
            return Err(miette!("no metadata files found"));
        }

        let mut labels = BTreeMap::new();
        for file in &files {
            debug!("scanning {}", file.path().display());
            let xml = std::fs::read_to_string(file.path())
                .into_diagnostic()
                .context(format!("path: {}", file.path().display()))?;

            labels.extend(
                labels_from_meta(&table, &xml)
                    .context(format!("parsing {}", file.path().display()))?,
            );
        }

        info!(
            "found {} of {} labels in {} files",
            labels.len(),
            table.len(),
            files.len()
        );
        write_json(&labels, self.output.as_ref(), self.overwrite)
    }
}
