use clap::Args;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use crate::commands::{gxt2::load, write_json};

#[derive(Args)]
pub struct ExportArgs {
    /// An input GXT2 file
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
        let table = load(&self.file)?;
        info!("exporting {} entries", table.len());

        write_json(&table, self.output.as_ref(), self.overwrite)
    }
}
