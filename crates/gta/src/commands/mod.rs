use std::{
    convert::Infallible,
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use gta_gxt2::{joaat, IntoHash};
use miette::{Context, IntoDiagnostic, Result};

pub mod fxt;
pub mod gxt2;
pub mod meta;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle GXT2 string tables
    Gxt2 {
        #[command(subcommand)]
        command: gxt2::Gxt2Commands,
    },
    /// Handle FXT text tables
    Fxt {
        #[command(subcommand)]
        command: fxt::FxtCommands,
    },
    /// Handle vehicle metadata files
    Meta {
        #[command(subcommand)]
        command: meta::MetaCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Gxt2 { command } => command.handle(),
            Commands::Fxt { command } => command.handle(),
            Commands::Meta { command } => command.handle(),
        }
    }
}

/// A table key given on the command line
///
/// Decimal numbers that fit a `u32` are taken as hashes, anything else is hashed as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key(pub u32);

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key(value.parse::<u32>().unwrap_or_else(|_| joaat(value)))
    }
}

impl FromStr for Key {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Key::from(s))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl IntoHash for Key {
    fn into_hash(self) -> gta_gxt2::error::Result<u32> {
        Ok(self.0)
    }
}

/// Open an input file, naming it in the error.
pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))
}

/// Create an output file, refusing to replace an existing one unless `overwrite` is set.
pub(crate) fn create(path: &Path, overwrite: bool) -> Result<File> {
    if !overwrite {
        File::create_new(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))
    } else {
        File::create(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))
    }
}

/// Write pretty JSON to `output`, or to stdout when no path is given.
pub(crate) fn write_json<T: serde::Serialize>(
    value: &T,
    output: Option<&PathBuf>,
    overwrite: bool,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(create(path, overwrite)?)),
        None => Box::new(std::io::stdout().lock()),
    };

    serde_json::to_writer_pretty(&mut writer, value).into_diagnostic()?;
    writeln!(writer).into_diagnostic()?;
    writer.flush().into_diagnostic()
}
