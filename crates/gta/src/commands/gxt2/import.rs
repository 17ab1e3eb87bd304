use clap::Args;
use indexmap::IndexMap;
use miette::{Context, IntoDiagnostic, Result};
use std::{io::Write, path::PathBuf};
use tracing::info;

use gta_gxt2::Gxt2Table;

use crate::commands::{create, open, Key};

#[derive(Args)]
pub struct ImportArgs {
    /// An input JSON object of keys to descriptions
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target GXT2 file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ImportArgs {
    pub fn handle(&self) -> Result<()> {
        let entries: IndexMap<String, String> = serde_json::from_reader(open(&self.file)?)
            .into_diagnostic()
            .context(format!("parsing {}", self.file.display()))?;

        let table = Gxt2Table::from_entries(
            entries
                .iter()
                .map(|(key, value)| (Key::from(key.as_str()), value)),
        )?;

        if table.len() != entries.len() {
            info!(
                "{} keys collapsed onto existing hashes",
                entries.len() - table.len()
            );
        }

        info!("writing {} entries to {}", table.len(), self.output.display());
        create(&self.output, self.overwrite)?
            .write_all(table.as_bytes())
            .into_diagnostic()
    }
}
