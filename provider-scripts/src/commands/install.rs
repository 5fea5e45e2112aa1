use clap::Args;
use eyre::{Context, Result, eyre};
use provider_build::{PluginInstaller, ProcessRunner};

use super::build::BuildCommand;

#[derive(Args)]
pub struct InstallCommand {
    #[command(flatten)]
    build: BuildCommand,
}

impl InstallCommand {
    pub fn run(&self) -> Result<()> {
        let pulumi_home = dirs::home_dir()
            .ok_or_else(|| eyre!("could not determine the home directory"))?
            .join(".pulumi");

        let installer =
            PluginInstaller::new(self.build.build_options(), pulumi_home, &ProcessRunner);
        let plugin_dir = installer.install().wrap_err("Install failed")?;
        println!("Installed to {}", plugin_dir.display());
        Ok(())
    }
}
