use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use provider_codegen::Generator;
use provider_schema::SchemaFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Provider project directory (defaults to the current directory)
    #[arg(short = 'C', long, default_value = ".")]
    pub cwd: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let schema = SchemaFile::open_in(&self.cwd).unwrap_or_exit();
        let path = Generator::new()
            .generate(schema.document(), &self.cwd)
            .wrap_err("Failed to generate provider types")?;
        println!("Generated {}", path.display());
        Ok(())
    }
}
