use std::fs::File;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use provider_codegen::Generator;
use provider_schema::SchemaFile;

use crate::error::Error;
use crate::exec::{CommandRunner, Invocation, run_checked};
use crate::project::{
    PACKAGE_FILE_NAME, PLUGIN_MANIFEST_FILE_NAME, PackageManager, ProjectMetadata, discover,
};
use crate::version::Version;

/// Configuration for one pipeline run, resolved once at startup.
///
/// Everything ambient (cwd, `GITHUB_REF`) is captured here by the caller;
/// the pipeline itself never reads process state.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Provider project directory.
    pub project_dir: PathBuf,
    /// Keep the staging directory after the run and report its path.
    pub retain: bool,
    /// Release ref (e.g. `refs/tags/v1.2.3`) that overrides the package
    /// version. `None` leaves package.json untouched.
    pub release_ref: Option<String>,
}

/// The staged build pipeline.
///
/// Stages run strictly in sequence; the first failure aborts the run. The
/// staging directory is a [`tempfile::TempDir`], so it is removed on every
/// exit path unless `retain` was requested.
pub struct BuildPipeline<'a> {
    options: BuildOptions,
    runner: &'a dyn CommandRunner,
}

impl<'a> BuildPipeline<'a> {
    pub fn new(options: BuildOptions, runner: &'a dyn CommandRunner) -> Self {
        Self { options, runner }
    }

    /// Run the whole pipeline and return the archive path.
    pub fn run(&self) -> Result<PathBuf> {
        let project_dir = &self.options.project_dir;

        let schema = SchemaFile::open_in(project_dir)?;
        Generator::new().generate(schema.document(), project_dir)?;

        let project = discover(project_dir)?;

        let staging = tempfile::Builder::new()
            .prefix("pulumi-provider-build")
            .tempdir()
            .wrap_err("failed to create staging directory")?;

        let outcome = self.assemble(staging.path(), &project);

        if self.options.retain {
            let retained = staging.keep();
            println!("Retained staging directory {}", retained.display());
        }

        outcome
    }

    /// Stages 4–8, all operating on the staging directory.
    fn assemble(&self, staging: &Path, project: &ProjectMetadata) -> Result<PathBuf> {
        self.compile(staging, project)?;
        self.resolve_version(staging)?;
        self.stage_files(staging, project)?;
        self.install_dependencies(staging, project)?;
        self.archive(staging, project)
    }

    /// Compile TypeScript sources into the staging directory.
    ///
    /// Emission is forced on even when the project's tsconfig suppresses it.
    fn compile(&self, staging: &Path, project: &ProjectMetadata) -> Result<()> {
        if !project.typescript {
            return Ok(());
        }
        let program = match project.package_manager {
            Some(PackageManager::Yarn) => "yarn",
            _ => "npx",
        };
        let invocation = Invocation::new(program)
            .args(["tsc", "--noEmit", "false", "--outDir"])
            .arg(staging.display().to_string())
            .current_dir(&self.options.project_dir);
        let output = run_checked(self.runner, &invocation)?;
        print!("{output}");
        Ok(())
    }

    /// Write package.json into staging, with the version overridden from the
    /// release ref when one is set.
    fn resolve_version(&self, staging: &Path) -> Result<()> {
        let source = self.options.project_dir.join(PACKAGE_FILE_NAME);
        let target = staging.join(PACKAGE_FILE_NAME);

        let Some(release_ref) = &self.options.release_ref else {
            std::fs::copy(&source, &target).map_err(|e| Error::io(&source, e))?;
            return Ok(());
        };

        let version = Version::from_release_tag(release_ref)?;
        let content =
            std::fs::read_to_string(&source).map_err(|e| Error::io(&source, e))?;
        let mut package: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            Box::new(Error::ParsePackage {
                path: source.clone(),
                source: e,
            })
        })?;
        match package.as_object_mut() {
            Some(object) => {
                object.insert(
                    "version".to_string(),
                    serde_json::Value::String(version.to_string()),
                );
            }
            // discover() already established the descriptor is an object.
            None => return Err(Box::new(Error::MissingName { path: source }).into()),
        }
        let staged = serde_json::to_string(&package).wrap_err("failed to serialize package.json")?;
        std::fs::write(&target, staged).map_err(|e| Error::io(&target, e))?;
        Ok(())
    }

    /// Copy the plugin manifest and the detected lock file into staging.
    fn stage_files(&self, staging: &Path, project: &ProjectMetadata) -> Result<()> {
        let manifest = self.options.project_dir.join(PLUGIN_MANIFEST_FILE_NAME);
        std::fs::copy(&manifest, staging.join(PLUGIN_MANIFEST_FILE_NAME))
            .map_err(|e| Error::io(&manifest, e))?;

        if let Some(package_manager) = project.package_manager {
            let lock = self.options.project_dir.join(package_manager.lock_file_name());
            std::fs::copy(&lock, staging.join(package_manager.lock_file_name()))
                .map_err(|e| Error::io(&lock, e))?;
        }
        Ok(())
    }

    /// Install production dependencies into staging.
    ///
    /// Strategy follows the lock convention: yarn → `yarn install`,
    /// npm lock → `npm ci` (frozen), no lock → `npm install`.
    fn install_dependencies(&self, staging: &Path, project: &ProjectMetadata) -> Result<()> {
        let (program, install_arg) = match project.package_manager {
            Some(PackageManager::Yarn) => ("yarn", "install"),
            Some(PackageManager::Npm) => ("npm", "ci"),
            None => ("npm", "install"),
        };
        let invocation = Invocation::new(program)
            .arg(install_arg)
            .current_dir(staging)
            .env("NODE_ENV", "production");
        let output = run_checked(self.runner, &invocation)?;
        print!("{output}");
        Ok(())
    }

    /// Pack every staging entry into `dist/<name>.tar.gz`.
    fn archive(&self, staging: &Path, project: &ProjectMetadata) -> Result<PathBuf> {
        let dist = self.options.project_dir.join("dist");
        std::fs::create_dir_all(&dist).map_err(|e| Error::io(&dist, e))?;
        let archive_path = dist.join(format!("{}.tar.gz", project.name));

        let file = File::create(&archive_path).map_err(|e| Error::io(&archive_path, e))?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        // Sorted so identical staging trees produce identical archives.
        let mut entries: Vec<_> = std::fs::read_dir(staging)
            .map_err(|e| Error::io(staging, e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io(staging, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name();
            let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
            if file_type.is_dir() {
                builder
                    .append_dir_all(&name, &path)
                    .wrap_err_with(|| format!("failed to archive {}", path.display()))?;
            } else {
                builder
                    .append_path_with_name(&path, &name)
                    .wrap_err_with(|| format!("failed to archive {}", path.display()))?;
            }
        }

        builder
            .into_inner()
            .and_then(GzEncoder::finish)
            .wrap_err("failed to finalize archive")?;

        Ok(archive_path)
    }
}
