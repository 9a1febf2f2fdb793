//! Provides a scripted [`ProcessRunner`] for tests.
//!
//! `FakeRunner` never spawns anything: it records every [`CommandSpec`] it receives and
//! answers with canned output chosen by matching the rendered command line against
//! registered prefixes (longest prefix wins). Unmatched commands succeed with empty output.

use super::runner::{CommandSpec, ProcessOutput, ProcessRunner};
use crate::error::{AppError, Result};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeState {
    /// Prefix -> queued outputs. The last output of a queue is repeated.
    responses: Vec<(String, VecDeque<ProcessOutput>)>,
    missing_programs: Vec<String>,
    calls: Vec<CommandSpec>,
}

#[derive(Clone, Default)]
pub struct FakeRunner {
    state: Arc<Mutex<FakeState>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers commands starting with `prefix` with `stdout` (exit code 0).
    ///
    /// Registering the same prefix again queues another answer, consumed in order.
    pub fn respond(self, prefix: &str, stdout: &str) -> Self {
        self.respond_output(prefix, ProcessOutput::stdout(stdout))
    }

    pub fn respond_output(self, prefix: &str, output: ProcessOutput) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            match state.responses.iter_mut().find(|(p, _)| p == prefix) {
                Some((_, queue)) => queue.push_back(output),
                None => state
                    .responses
                    .push((prefix.to_string(), VecDeque::from([output]))),
            }
        }
        self
    }

    /// Makes every invocation of `program` fail as if it were not installed.
    pub fn fail_spawn(self, program: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .missing_programs
            .push(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Rendered command lines, in call order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    pub fn was_called(&self, prefix: &str) -> bool {
        self.command_lines().iter().any(|line| line.starts_with(prefix))
    }

    fn answer(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(spec.clone());

        if state.missing_programs.contains(&spec.program) {
            return Err(AppError::Spawn {
                command: spec.to_string(),
                source: Arc::new(io::Error::new(io::ErrorKind::NotFound, "not found")),
            });
        }

        let line = spec.to_string();
        let best = state
            .responses
            .iter_mut()
            .filter(|(prefix, _)| line.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len());

        let output = match best {
            Some((_, queue)) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some((_, queue)) => queue.front().cloned().unwrap_or_default(),
            None => ProcessOutput::stdout(""),
        };
        Ok(output)
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        self.answer(spec)
    }

    async fn run_attached(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        self.answer(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_longest_prefix_and_queue() {
        let runner = FakeRunner::new()
            .respond("git", "generic")
            .respond("git commit", "first")
            .respond("git commit", "second");

        let commit = CommandSpec::new("git").args(["commit", "-m", "x"]);
        let status = CommandSpec::new("git").arg("status");

        assert_eq!(runner.run(&commit).await.unwrap().stdout, "first");
        assert_eq!(runner.run(&commit).await.unwrap().stdout, "second");
        assert_eq!(runner.run(&commit).await.unwrap().stdout, "second");
        assert_eq!(runner.run(&status).await.unwrap().stdout, "generic");
        assert_eq!(runner.calls().len(), 4);
    }
}
