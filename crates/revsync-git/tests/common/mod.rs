#![allow(dead_code)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use revsync_core::{CommandOutput, CommandRunner, MemorySink, Result, RevsyncError};
use revsync_git::{GitBackend, GitBackendConfig};

pub const REPO_URL: &str = "https://github.com/org/docs.git";

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: HashMap<String, String>,
}

impl Call {
    /// Arguments joined with spaces, e.g. `fetch --prune`.
    pub fn command(&self) -> String {
        self.args.join(" ")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Output(CommandOutput),
    SpawnFailure,
}

/// Runner answering git invocations from a script.
///
/// Rules match on an argument prefix; the most recently added matching rule
/// wins. Unmatched invocations succeed with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    rules: Mutex<Vec<(Vec<String>, Reply)>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, prefix: &[&str], output: CommandOutput) {
        self.push(prefix, Reply::Output(output));
    }

    pub fn fail_to_spawn(&self, prefix: &[&str]) {
        self.push(prefix, Reply::SpawnFailure);
    }

    fn push(&self, prefix: &[&str], reply: Reply) {
        let prefix = prefix.iter().map(|s| s.to_string()).collect();
        self.rules.lock().push((prefix, reply));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Recorded commands as `args.join(" ")`.
    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().iter().map(Call::command).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        env: &HashMap<String, String>,
    ) -> Result<CommandOutput> {
        self.calls.lock().push(Call {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.to_path_buf(),
            env: env.clone(),
        });

        let rules = self.rules.lock();
        let reply = rules
            .iter()
            .rev()
            .find(|(prefix, _)| {
                prefix.len() <= args.len() && prefix.iter().zip(args).all(|(p, a)| p == a)
            })
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Output(output)) => Ok(output),
            Some(Reply::SpawnFailure) => Err(RevsyncError::command_spawn(
                program,
                std::io::Error::new(std::io::ErrorKind::NotFound, "scripted spawn failure"),
            )),
            None => Ok(CommandOutput::ok("")),
        }
    }
}

/// Builds a backend over `runner` with a memory sink.
pub fn backend(
    working_dir: &Path,
    default_branch: Option<&str>,
    runner: Arc<ScriptedRunner>,
) -> (GitBackend, MemorySink) {
    let config = GitBackendConfig::builder()
        .repo_url(REPO_URL)
        .working_dir(working_dir)
        .maybe_default_branch(default_branch)
        .build()
        .expect("Failed to build test configuration");
    let sink = MemorySink::new();
    let backend = GitBackend::new(config, runner).with_sink(Arc::new(sink.clone()));
    (backend, sink)
}

/// Scripts an existing checkout of [`REPO_URL`].
pub fn existing_checkout(runner: &ScriptedRunner) {
    runner.respond(
        &["config", "-f"],
        CommandOutput::ok(format!("{}\n", REPO_URL)),
    );
}
