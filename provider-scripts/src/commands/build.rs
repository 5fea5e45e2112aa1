use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use provider_build::{BuildOptions, BuildPipeline, ProcessRunner};

#[derive(Args)]
pub struct BuildCommand {
    /// Provider project directory (defaults to the current directory)
    #[arg(short = 'C', long, default_value = ".")]
    pub cwd: PathBuf,

    /// Skip deleting the temporary build directory
    #[arg(long)]
    pub retain: bool,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let options = self.build_options();
        let archive = BuildPipeline::new(options, &ProcessRunner)
            .run()
            .wrap_err("Build failed")?;
        println!("Packed provider to {}", archive.display());
        Ok(())
    }

    /// Capture ambient state (release ref) once; the pipeline never reads
    /// the process environment itself.
    pub(crate) fn build_options(&self) -> BuildOptions {
        BuildOptions {
            project_dir: self.cwd.clone(),
            retain: self.retain,
            release_ref: std::env::var("GITHUB_REF").ok(),
        }
    }
}
