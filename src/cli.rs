use clap::Parser;
use std::path::PathBuf;
use anyhow::Result;

use crate::core::Engine;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Generate AsciiDoc documentation and PlantUML diagram notes from source files")]
#[command(version)]
pub struct Cli {
    /// Paths to the files to be processed
    #[arg(required = true)]
    pub file_paths: Vec<PathBuf>,

    /// The output name of the documentation file
    #[arg(short, long, default_value = "documentation")]
    pub filename: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn execute(self, engine: Engine) -> Result<()> {
        engine.run(&self.file_paths, &self.filename).await
    }
}
