use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for provider-build operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(provider_build::read_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(provider_build::parse_error))]
    ParsePackage {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("name missing in package.json")]
    #[diagnostic(
        code(provider_build::missing_name),
        help("add a string \"name\" field to {path:?}")
    )]
    MissingName { path: PathBuf },

    #[error("invalid version tag '{tag}'")]
    #[diagnostic(
        code(provider_build::invalid_version_tag),
        help("release tags must look like v1.2.3, with no pre-release or build suffix")
    )]
    InvalidVersionTag { tag: String },

    #[error("failed to launch '{program}'")]
    #[diagnostic(
        code(provider_build::spawn_error),
        help("make sure '{program}' is installed and on PATH")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed:\n{output}")]
    #[diagnostic(code(provider_build::command_failed))]
    CommandFailed { program: String, output: String },

    #[error("{path} doesn't exist")]
    #[diagnostic(
        code(provider_build::plugin_host_not_found),
        help("run pulumi once so its home directory exists; this tool never creates it")
    )]
    PluginHostNotFound { path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
