use std::path::Path;

use crate::{Error, Result};

/// Project descriptor file name.
pub const PACKAGE_FILE_NAME: &str = "package.json";

/// Pulumi plugin manifest file name, copied verbatim into the package.
pub const PLUGIN_MANIFEST_FILE_NAME: &str = "PulumiPlugin.yaml";

/// Which dependency-lock convention governs the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// `package-lock.json`; installs with `npm ci`.
    Npm,
    /// `yarn.lock`; installs with `yarn install`.
    Yarn,
}

impl PackageManager {
    /// Lock file name for this convention.
    pub fn lock_file_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    /// Detect the convention from lock files present in `dir`.
    ///
    /// npm takes priority when both lock files exist.
    pub fn detect(dir: &Path) -> Option<Self> {
        if dir.join(PackageManager::Npm.lock_file_name()).exists() {
            Some(PackageManager::Npm)
        } else if dir.join(PackageManager::Yarn.lock_file_name()).exists() {
            Some(PackageManager::Yarn)
        } else {
            None
        }
    }
}

/// What `discover` learned about the provider project.
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    /// Package name from package.json. Mandatory.
    pub name: String,
    /// Package version from package.json; `"0.0.0"` when absent or not a
    /// string.
    pub version: String,
    /// Set when a tsconfig.json is present and sources need compiling.
    pub typescript: bool,
    /// Detected lock convention, if any.
    pub package_manager: Option<PackageManager>,
}

/// Read project metadata out of `dir`.
pub fn discover(dir: &Path) -> Result<ProjectMetadata> {
    let package_path = dir.join(PACKAGE_FILE_NAME);
    let content = std::fs::read_to_string(&package_path)
        .map_err(|e| Error::io(&package_path, e))?;
    let package: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        Box::new(Error::ParsePackage {
            path: package_path.clone(),
            source: e,
        })
    })?;

    let Some(name) = package.get("name").and_then(serde_json::Value::as_str) else {
        return Err(Box::new(Error::MissingName { path: package_path }));
    };
    let version = package
        .get("version")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("0.0.0");

    Ok(ProjectMetadata {
        name: name.to_string(),
        version: version.to_string(),
        typescript: dir.join("tsconfig.json").exists(),
        package_manager: PackageManager::detect(dir),
    })
}
