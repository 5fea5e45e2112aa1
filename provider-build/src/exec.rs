use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// One subprocess invocation, fully described.
///
/// Nothing here is ambient: working directory and environment overrides are
/// explicit so invocations can be recorded and replayed in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
    pub envs: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

/// What a finished subprocess reported.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    /// Stdout and stderr, concatenated.
    pub combined: String,
}

/// Runs subprocess invocations.
///
/// The build pipeline only talks to package managers and compilers through
/// this trait; tests substitute a recording fake.
pub trait CommandRunner {
    /// Run the invocation to completion, blocking until it exits.
    ///
    /// Failing to launch the program is an error; the program exiting
    /// non-zero is a `CommandOutput` with `success == false`.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Real subprocess execution via `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }
        for (key, value) in &invocation.envs {
            command.env(key, value);
        }

        let output = command.output().map_err(|e| {
            Box::new(Error::Spawn {
                program: invocation.program.clone(),
                source: e,
            })
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            combined,
        })
    }
}

/// Run an invocation and turn a non-zero exit into a fatal error carrying
/// the subprocess output verbatim.
pub fn run_checked(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<String> {
    let output = runner.run(invocation)?;
    if !output.success {
        return Err(Box::new(Error::CommandFailed {
            program: invocation.program.clone(),
            output: output.combined,
        }));
    }
    Ok(output.combined)
}
