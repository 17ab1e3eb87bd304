pub mod labels;

#[derive(clap::Subcommand)]
pub enum MetaCommands {
    /// Find the labels of GXT2 entries in vehicle metadata
    Labels(labels::LabelsArgs),
}

impl MetaCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            MetaCommands::Labels(labels) => labels.handle(),
        }
    }
}
