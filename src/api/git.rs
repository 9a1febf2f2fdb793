//! Wrapper around the `git` binary, bound to one working directory.
//!
//! Every invocation carries the project directory as its `cwd`; the process-wide
//! current directory is never touched.

use super::detect;
use super::runner::{CommandSpec, Outcome, ProcessOutput, ProcessRunner};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct GitClient<'a, R> {
    runner: &'a R,
    program: &'a str,
    workdir: PathBuf,
}

impl<'a, R: ProcessRunner> GitClient<'a, R> {
    pub fn new(runner: &'a R, program: &'a str, workdir: impl AsRef<Path>) -> Self {
        Self {
            runner,
            program,
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Whether the working directory already holds a `.git` entry.
    pub fn is_repository(&self) -> bool {
        self.workdir.join(".git").exists()
    }

    fn command<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(self.program)
            .args(args)
            .current_dir(&self.workdir)
    }

    async fn git<I, S>(&self, args: I) -> Result<ProcessOutput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runner.run(&self.command(args)).await
    }

    pub async fn init(&self, branch: &str) -> Result<ProcessOutput> {
        self.git(["init", "-b", branch]).await
    }

    /// Name of the checked-out branch, empty on a detached HEAD or unborn repository
    /// without a branch name.
    pub async fn current_branch(&self) -> Result<String> {
        let output = self.git(["branch", "--show-current"]).await?;
        Ok(output.stdout.trim_end_matches(['\r', '\n']).to_string())
    }

    pub async fn remotes(&self) -> Result<ProcessOutput> {
        self.git(["remote", "-v"]).await
    }

    /// Points `origin` at `url`, adding the remote when it does not exist yet.
    ///
    /// Returns `true` when an existing `origin` was repointed.
    pub async fn set_origin(&self, url: &str) -> Result<bool> {
        let remotes = self.remotes().await?;
        if detect::has_origin_remote(&remotes.combined()) {
            info!("Remote 'origin' already exists, updating URL to {}", url);
            self.git(["remote", "set-url", "origin", url]).await?;
            Ok(true)
        } else {
            info!("Adding remote 'origin' -> {}", url);
            self.git(["remote", "add", "origin", url]).await?;
            Ok(false)
        }
    }

    pub async fn add_all(&self) -> Result<ProcessOutput> {
        self.git(["add", "."]).await
    }

    pub async fn add_path(&self, path: &str) -> Result<ProcessOutput> {
        let output = self.git(["add", path]).await?;
        if detect::git_fatal(&output.combined()) {
            warn!("git add {} failed: {}", path, output.combined().trim());
        }
        Ok(output)
    }

    /// Unstages everything.
    pub async fn reset(&self) -> Result<ProcessOutput> {
        self.git(["reset"]).await
    }

    pub async fn commit(&self, message: &str) -> Result<Outcome> {
        let output = self.git(["commit", "-m", message]).await?;
        let succeeded = detect::commit_succeeded(&output.combined());
        if !succeeded {
            warn!("git commit did not report a commit: {}", output.combined().trim());
        }
        Ok(Outcome { succeeded, output })
    }

    /// `git add .` followed by a commit.
    pub async fn commit_all(&self, message: &str) -> Result<Outcome> {
        self.add_all().await?;
        self.commit(message).await
    }

    /// Clears the index, stages exactly `files` (in order, duplicates included) and commits.
    pub async fn commit_selected(&self, files: &[String], message: &str) -> Result<Outcome> {
        self.reset().await?;
        for file in files {
            debug!("Staging {}", file);
            self.add_path(file).await?;
        }
        self.commit(message).await
    }

    /// `git push -u origin <branch>`, left to run as long as the upload takes.
    pub async fn push(&self, branch: &str) -> Result<Outcome> {
        let spec = self
            .command(["push", "-u", "origin", branch])
            .without_timeout();
        let output = self.runner.run(&spec).await?;
        let succeeded = detect::push_succeeded(&output.combined());
        if !succeeded {
            warn!("git push reported an error: {}", output.combined().trim());
        }
        Ok(Outcome { succeeded, output })
    }

    /// Short-format status, as shown to the user before choosing files.
    pub async fn short_status(&self) -> Result<String> {
        Ok(self.git(["status", "-s"]).await?.combined())
    }

    /// Untracked files that are not ignored, one per line.
    ///
    /// Listings turn off `core.quotePath` so non-ASCII names come back as-is and can
    /// be handed straight to `git add`.
    pub async fn untracked_files(&self) -> Result<String> {
        Ok(self
            .git([
                "-c",
                "core.quotePath=false",
                "ls-files",
                "--others",
                "--exclude-standard",
            ])
            .await?
            .stdout)
    }

    /// Tracked files with unstaged modifications, one per line.
    pub async fn modified_files(&self) -> Result<String> {
        Ok(self
            .git(["-c", "core.quotePath=false", "ls-files", "--modified"])
            .await?
            .stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::FakeRunner;

    #[tokio::test]
    async fn test_every_call_runs_in_workdir() {
        let runner = FakeRunner::new();
        let git = GitClient::new(&runner, "git", "/work/project");

        git.init("main").await.unwrap();
        git.short_status().await.unwrap();

        for call in runner.calls() {
            assert_eq!(call.cwd.as_deref(), Some(Path::new("/work/project")));
        }
        assert_eq!(runner.calls()[0].args, vec!["init", "-b", "main"]);
    }

    #[tokio::test]
    async fn test_current_branch_strips_newline() {
        let runner = FakeRunner::new().respond("git branch --show-current", "develop\r\n");
        let git = GitClient::new(&runner, "git", "/work/project");
        assert_eq!(git.current_branch().await.unwrap(), "develop");
    }

    #[tokio::test]
    async fn test_set_origin_adds_when_missing() {
        let runner = FakeRunner::new().respond("git remote -v", "");
        let git = GitClient::new(&runner, "git", "/work/project");

        assert!(!git.set_origin("https://github.com/octocat/demo").await.unwrap());

        assert!(runner.was_called("git remote add origin https://github.com/octocat/demo"));
        assert!(!runner.was_called("git remote set-url"));
    }

    #[tokio::test]
    async fn test_set_origin_updates_existing() {
        let runner = FakeRunner::new().respond(
            "git remote -v",
            "origin\tgit@github.com:octocat/old.git (fetch)\norigin\tgit@github.com:octocat/old.git (push)\n",
        );
        let git = GitClient::new(&runner, "git", "/work/project");

        assert!(git.set_origin("https://github.com/octocat/demo").await.unwrap());

        assert!(runner.was_called("git remote set-url origin https://github.com/octocat/demo"));
        assert!(!runner.was_called("git remote add"));
    }

    #[tokio::test]
    async fn test_commit_selected_resets_then_adds_each_file() {
        let runner = FakeRunner::new().respond("git commit", " 2 files changed, 2 insertions(+)\n");
        let git = GitClient::new(&runner, "git", "/work/project");
        let files = vec!["a.txt".to_string(), "my notes.md".to_string()];

        let outcome = git.commit_selected(&files, "Add notes").await.unwrap();

        assert!(outcome.succeeded);
        let args: Vec<Vec<String>> = runner.calls().into_iter().map(|c| c.args).collect();
        assert_eq!(
            args,
            vec![
                vec!["reset".to_string()],
                vec!["add".to_string(), "a.txt".to_string()],
                vec!["add".to_string(), "my notes.md".to_string()],
                vec!["commit".to_string(), "-m".to_string(), "Add notes".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn test_commit_failure_is_reported() {
        let runner = FakeRunner::new().respond("git commit", "Author identity unknown\n");
        let git = GitClient::new(&runner, "git", "/work/project");

        let outcome = git.commit_all("msg").await.unwrap();

        assert!(!outcome.succeeded);
        assert!(runner.was_called("git add ."));
    }

    #[tokio::test]
    async fn test_push_reads_stderr_for_errors() {
        let runner = FakeRunner::new().respond_output(
            "git push",
            ProcessOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: "error: src refspec main does not match any\n".to_string(),
            },
        );
        let git = GitClient::new(&runner, "git", "/work/project");

        let outcome = git.push("main").await.unwrap();

        assert!(!outcome.succeeded);
        assert_eq!(runner.calls()[0].args, vec!["push", "-u", "origin", "main"]);
    }

    #[tokio::test]
    async fn test_only_push_skips_timeout() {
        let runner = FakeRunner::new();
        let git = GitClient::new(&runner, "git", "/work/project");

        git.commit_all("msg").await.unwrap();
        git.push("main").await.unwrap();

        let calls = runner.calls();
        let (push, rest) = calls.split_last().unwrap();
        assert!(push.untimed);
        assert_eq!(push.cwd.as_deref(), Some(Path::new("/work/project")));
        assert!(rest.iter().all(|call| !call.untimed));
    }

    #[tokio::test]
    async fn test_add_path_keeps_fatal_output() {
        let runner = FakeRunner::new().respond_output(
            "git add",
            ProcessOutput {
                code: Some(128),
                stdout: String::new(),
                stderr: "fatal: pathspec 'gone.txt' did not match any files\n".to_string(),
            },
        );
        let git = GitClient::new(&runner, "git", "/work/project");

        let output = git.add_path("gone.txt").await.unwrap();

        assert!(!output.success());
        assert!(detect::git_fatal(&output.combined()));
    }

    #[tokio::test]
    async fn test_file_listings_disable_path_quoting() {
        let runner = FakeRunner::new()
            .respond(
                "git -c core.quotePath=false ls-files --others --exclude-standard",
                "café.txt\n",
            )
            .respond("git -c core.quotePath=false ls-files --modified", "old.txt\n");
        let git = GitClient::new(&runner, "git", "/work/project");

        assert_eq!(git.untracked_files().await.unwrap(), "café.txt\n");
        assert_eq!(git.modified_files().await.unwrap(), "old.txt\n");
    }
}
