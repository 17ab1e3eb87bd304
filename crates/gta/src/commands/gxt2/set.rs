use clap::Args;
use miette::{IntoDiagnostic, Result};
use std::{io::Write, path::PathBuf};
use tracing::info;

use crate::commands::{create, gxt2::load, Key};

#[derive(Args)]
pub struct SetArgs {
    /// A GXT2 file, edited in place unless an output is given
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target GXT2 file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,

    /// Hash or label of the entry
    #[arg(value_name = "KEY")]
    key: Key,

    /// The new description
    #[arg(value_name = "TEXT")]
    description: String,
}

impl SetArgs {
    pub fn handle(&self) -> Result<()> {
        let mut table = load(&self.file)?;
        table.set(self.key, &self.description)?;

        let (path, overwrite) = match &self.output {
            Some(output) => (output, self.overwrite),
            None => (&self.file, true),
        };

        info!("writing {} entries to {}", table.len(), path.display());
        create(path, overwrite)?
            .write_all(table.as_bytes())
            .into_diagnostic()
    }
}
