//! Command runner seam for invoking external programs.

use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::error::{Result, RevsyncError};
use crate::types::CommandOutput;

/// Executes external programs on behalf of a backend.
///
/// Implementations run `program` with `args` inside `cwd`, using exactly the
/// environment in `env`, and block until the program exits. A non-zero exit
/// is a normal [`CommandOutput`]; only failing to start the program is an
/// error. Timeouts, if any, belong to the implementation.
pub trait CommandRunner: Send + Sync {
    /// Runs a program to completion and captures its output.
    ///
    /// # Errors
    ///
    /// Returns `RevsyncError::CommandSpawn` if the program cannot be started.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        env: &HashMap<String, String>,
    ) -> Result<CommandOutput>;
}

/// Runner that spawns real processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Creates a new process runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        env: &HashMap<String, String>,
    ) -> Result<CommandOutput> {
        trace!("Running {} {:?} in {:?}", program, args, cwd);

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .env_clear()
            .envs(env)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RevsyncError::command_spawn(program, e))?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
