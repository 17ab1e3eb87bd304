use clap::Args;
use gta_fxt::FxtTable;
use miette::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::commands::{open, write_json};

#[derive(Args)]
pub struct ExportArgs {
    /// An input FXT file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target JSON file, stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExportArgs {
    pub fn handle(&self) -> Result<()> {
        let table = FxtTable::read(open(&self.file)?)
            .context(format!("reading {}", self.file.display()))?;
        info!("exporting {} entries", table.len());

        write_json(&table, self.output.as_ref(), self.overwrite)
    }
}
