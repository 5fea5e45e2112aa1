mod build;
mod generate;
mod install;

use build::BuildCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use install::InstallCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for provider_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "provider-scripts")]
#[command(version)]
#[command(about = "Build helpers for NodeJS Pulumi providers")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Build(cmd) => cmd.run(),
            Commands::Install(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate provider types from schema.json
    Generate(GenerateCommand),

    /// Build the provider package to ./dist
    Build(BuildCommand),

    /// Build and install the provider into the local Pulumi plugin registry
    Install(InstallCommand),
}
