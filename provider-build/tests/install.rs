//! Plugin installer tests against the fake command runner.

mod common;

use common::{FakeRunner, provider_project};
use provider_build::{BuildOptions, PluginInstaller};

fn options(dir: &tempfile::TempDir) -> BuildOptions {
    BuildOptions {
        project_dir: dir.path().to_path_buf(),
        retain: false,
        release_ref: None,
    }
}

#[test]
fn test_install_extracts_into_registry() {
    let project = provider_project(r#"{"name": "acme", "version": "1.0.0"}"#, &[]);
    let home = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();

    let plugin_dir = PluginInstaller::new(options(&project), home.path(), &runner)
        .install()
        .unwrap();

    assert_eq!(
        plugin_dir,
        home.path().join("plugins/provider-acme-v1.0.0")
    );
    assert!(plugin_dir.join("package.json").exists());
    assert!(plugin_dir.join("PulumiPlugin.yaml").exists());
}

#[test]
fn test_missing_host_is_fatal() {
    let project = provider_project(r#"{"name": "acme", "version": "1.0.0"}"#, &[]);
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope/.pulumi");
    let runner = FakeRunner::new();

    let err = PluginInstaller::new(options(&project), &missing, &runner)
        .install()
        .unwrap_err();

    assert!(err.to_string().contains("doesn't exist"));
    assert!(!missing.exists());
}

#[test]
fn test_reinstall_replaces_existing_plugin_dir() {
    let project = provider_project(r#"{"name": "acme", "version": "1.0.0"}"#, &[]);
    let home = tempfile::tempdir().unwrap();
    let plugin_dir = home.path().join("plugins/provider-acme-v1.0.0");
    std::fs::create_dir_all(&plugin_dir).unwrap();
    std::fs::write(plugin_dir.join("stale-artifact"), "old").unwrap();
    let runner = FakeRunner::new();

    PluginInstaller::new(options(&project), home.path(), &runner)
        .install()
        .unwrap();

    assert!(!plugin_dir.join("stale-artifact").exists());
    assert!(plugin_dir.join("package.json").exists());
}

#[test]
fn test_plugin_dir_uses_descriptor_version_not_release_tag() {
    // The registry entry is keyed by the version in the working tree's
    // package.json; a release tag only rewrites the staged copy.
    let project = provider_project(r#"{"name": "acme", "version": "1.0.0"}"#, &[]);
    let home = tempfile::tempdir().unwrap();
    let runner = FakeRunner::new();
    let mut opts = options(&project);
    opts.release_ref = Some("refs/tags/v2.0.1".to_string());

    let plugin_dir = PluginInstaller::new(opts, home.path(), &runner)
        .install()
        .unwrap();

    assert!(plugin_dir.ends_with("plugins/provider-acme-v1.0.0"));
    let staged: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(plugin_dir.join("package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(staged["version"], "2.0.1");
}
