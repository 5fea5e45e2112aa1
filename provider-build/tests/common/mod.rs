//! Shared fixtures: a recording fake runner and a minimal provider project.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;

use provider_build::{CommandOutput, CommandRunner, Invocation, Result};

/// Records invocations instead of spawning processes.
pub struct FakeRunner {
    pub invocations: RefCell<Vec<Invocation>>,
    fail_program: Option<&'static str>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            fail_program: None,
        }
    }

    /// Fake where every run of `program` exits non-zero.
    pub fn failing(program: &'static str) -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            fail_program: Some(program),
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|invocation| invocation.program.clone())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        self.invocations.borrow_mut().push(invocation.clone());
        let success = self.fail_program != Some(invocation.program.as_str());
        Ok(CommandOutput {
            success,
            combined: if success {
                String::new()
            } else {
                "simulated subprocess failure".to_string()
            },
        })
    }
}

pub const WIDGET_SCHEMA: &str = r#"{
    "resources": {
        "acme:index:Widget": {
            "inputProperties": {"size": {"type": "integer"}},
            "requiredInputs": ["size"],
            "properties": {"label": {"type": "string"}},
            "required": ["label"]
        }
    }
}"#;

/// Lay out a provider project in a fresh temp dir.
///
/// Always writes schema.json and PulumiPlugin.yaml; `package_json` and any
/// `extra_files` come from the caller.
pub fn provider_project(package_json: &str, extra_files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "schema.json", WIDGET_SCHEMA);
    write(dir.path(), "PulumiPlugin.yaml", "runtime: nodejs\n");
    write(dir.path(), "package.json", package_json);
    for (name, content) in extra_files {
        write(dir.path(), name, content);
    }
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}
