use std::fs::File;
use std::path::PathBuf;

use eyre::{Context, Result};
use flate2::read::GzDecoder;

use crate::error::Error;
use crate::exec::CommandRunner;
use crate::pipeline::{BuildOptions, BuildPipeline};
use crate::project::discover;

/// Installs a freshly built provider package into the local Pulumi plugin
/// registry.
///
/// The registry root must already exist; this tool never provisions it. A
/// plugin directory for the same name and version is replaced wholesale.
/// The remove–recreate–extract sequence is not atomic, so a crash mid-way
/// can leave the plugin directory missing or partially populated.
pub struct PluginInstaller<'a> {
    options: BuildOptions,
    pulumi_home: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> PluginInstaller<'a> {
    pub fn new(
        options: BuildOptions,
        pulumi_home: impl Into<PathBuf>,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            options,
            pulumi_home: pulumi_home.into(),
            runner,
        }
    }

    /// Build the package and extract it into the plugin registry, returning
    /// the plugin directory.
    pub fn install(&self) -> Result<PathBuf> {
        let archive_path = BuildPipeline::new(self.options.clone(), self.runner).run()?;
        let project = discover(&self.options.project_dir)?;

        if !self.pulumi_home.exists() {
            return Err(Box::new(Error::PluginHostNotFound {
                path: self.pulumi_home.clone(),
            })
            .into());
        }

        let plugin_dir = self
            .pulumi_home
            .join("plugins")
            .join(format!("provider-{}-v{}", project.name, project.version));

        if plugin_dir.exists() {
            std::fs::remove_dir_all(&plugin_dir)
                .wrap_err_with(|| format!("failed to remove {}", plugin_dir.display()))?;
        }
        std::fs::create_dir_all(&plugin_dir)
            .wrap_err_with(|| format!("failed to create {}", plugin_dir.display()))?;

        let file = File::open(&archive_path).map_err(|e| Error::io(&archive_path, e))?;
        let mut archive = tar::Archive::new(GzDecoder::new(file));
        archive
            .unpack(&plugin_dir)
            .wrap_err_with(|| format!("failed to extract into {}", plugin_dir.display()))?;

        Ok(plugin_dir)
    }
}
