//! Build pipeline and local plugin installer for NodeJS Pulumi providers.
//!
//! The pipeline regenerates provider types from the schema, compiles
//! TypeScript sources when present, assembles a self-contained package in a
//! temporary staging directory, installs production dependencies into it,
//! and archives the result to `dist/<name>.tar.gz`. The installer extracts
//! that archive into the local Pulumi plugin registry.
//!
//! All subprocess work goes through the [`CommandRunner`] trait so tests can
//! run the pipeline without spawning real package managers.

mod error;
mod exec;
mod install;
mod pipeline;
mod project;
mod version;

pub use error::{Error, Result};
pub use exec::{CommandOutput, CommandRunner, Invocation, ProcessRunner, run_checked};
pub use install::PluginInstaller;
pub use pipeline::{BuildOptions, BuildPipeline};
pub use project::{
    PACKAGE_FILE_NAME, PLUGIN_MANIFEST_FILE_NAME, PackageManager, ProjectMetadata, discover,
};
pub use version::Version;
