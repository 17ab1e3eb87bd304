pub mod export;
pub mod import;

#[derive(clap::Subcommand)]
pub enum FxtCommands {
    /// Export a FXT file to JSON
    Export(export::ExportArgs),
    /// Create a FXT file from JSON
    Import(import::ImportArgs),
}

impl FxtCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            FxtCommands::Export(export) => export.handle(),
            FxtCommands::Import(import) => import.handle(),
        }
    }
}
