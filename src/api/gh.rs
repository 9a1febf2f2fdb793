//! Wrapper around the GitHub CLI (`gh`).
//!
//! `gh` owns authentication and repository creation; this client only builds the
//! invocations and interprets their output through the predicates in [`super::detect`].

use super::detect;
use super::runner::{CommandSpec, ProcessOutput, ProcessRunner};
use crate::error::{AppError, Result};
use crate::models::{repo_url, GhUser, RepoCreation, RepoSpec};
use tracing::{debug, info, warn};

/// Issues `gh` subcommands through a [`ProcessRunner`].
pub struct GhClient<'a, R> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: ProcessRunner> GhClient<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(self.program)
    }

    /// Whether `gh` is present on this machine.
    ///
    /// A program that cannot be spawned counts as "not installed" rather than an error.
    pub async fn is_installed(&self) -> Result<bool> {
        match self.runner.run(&self.command().arg("--version")).await {
            Ok(output) => Ok(detect::gh_installed(&output.combined())),
            Err(AppError::Spawn { command, source }) => {
                debug!("{} could not be started: {}", command, source);
                Ok(false)
            },
            Err(e) => Err(e),
        }
    }

    /// Raw `gh auth status` output.
    pub async fn auth_status(&self) -> Result<ProcessOutput> {
        self.runner
            .run(&self.command().args(["auth", "status"]))
            .await
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        let output = self.auth_status().await?;
        Ok(detect::looks_authenticated(&output.combined()))
    }

    /// Runs the browser-based login attached to the terminal.
    pub async fn login(&self) -> Result<ProcessOutput> {
        info!("Starting interactive gh login");
        self.runner
            .run_attached(&self.command().args(["auth", "login", "-w"]))
            .await
    }

    /// The authenticated user, or `None` when `gh api user` did not return a user record.
    pub async fn current_user(&self) -> Result<Option<GhUser>> {
        let output = self.runner.run(&self.command().args(["api", "user"])).await?;
        match serde_json::from_str::<GhUser>(output.stdout.trim()) {
            Ok(user) => {
                debug!("Current GitHub user: {}", user.login);
                Ok(Some(user))
            },
            Err(e) => {
                warn!("Could not read login from `gh api user`: {}", e);
                Ok(None)
            },
        }
    }

    /// Creates the repository on GitHub under the current user.
    ///
    /// The network round-trip is not bounded by the command timeout.
    pub async fn create_repository(&self, repo: &RepoSpec) -> Result<RepoCreation> {
        let Some(user) = self.current_user().await? else {
            return Ok(RepoCreation::UnknownUser);
        };

        info!(
            "Creating {} repository {}/{}",
            repo.visibility, user.login, repo.name
        );
        let spec = self
            .command()
            .args(["repo", "create"])
            .arg(repo.name.as_str())
            .arg("--description")
            .arg(repo.description.as_str())
            .arg(repo.visibility.flag())
            .without_timeout();
        let output = self.runner.run(&spec).await?;

        if detect::repo_created(&output.combined()) {
            Ok(RepoCreation::Created {
                url: repo_url(&user.login, &repo.name),
            })
        } else {
            warn!("gh repo create did not report success");
            Ok(RepoCreation::Failed(output))
        }
    }
}
