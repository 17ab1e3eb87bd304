use clap::Args;
use gta_fxt::FxtTable;
use miette::{Context, IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

use crate::commands::{create, open};

#[derive(Args)]
pub struct ImportArgs {
    /// An input JSON object of keys to values
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target FXT file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ImportArgs {
    pub fn handle(&self) -> Result<()> {
        let table: FxtTable = serde_json::from_reader(open(&self.file)?)
            .into_diagnostic()
            .context(format!("parsing {}", self.file.display()))?;

        info!("writing {} entries to {}", table.len(), self.output.display());
        table
            .write(create(&self.output, self.overwrite)?)
            .context(format!("writing {}", self.output.display()))
    }
}
