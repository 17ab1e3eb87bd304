use clap::Args;
use miette::{miette, Result};
use std::path::PathBuf;
use tracing::warn;

use crate::commands::{gxt2::load, Key};

#[derive(Args)]
pub struct GetArgs {
    /// An input GXT2 file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Hashes or labels to look up
    #[arg(required = true, value_name = "KEY")]
    keys: Vec<Key>,
}

impl GetArgs {
    pub fn handle(&self) -> Result<()> {
        let table = load(&self.file)?;

        let mut missing = 0;
        for key in &self.keys {
            match table.get(*key)? {
                Some(value) => println!("{}: {}", key, value),
                None => {
                    warn!("{} not found", key);
                    missing += 1;
                }
            }
        }

        if missing > 0 {
            return Err(miette!("{} of {} keys not found", missing, self.keys.len()));
        }

        Ok(())
    }
}
