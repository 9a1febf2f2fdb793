//! Runtime settings for the tool.
//!
//! The tool reads no configuration file and no environment variables (apart from
//! `RUST_LOG` for logging); everything tunable lives in [`Config`] with sensible defaults.

use std::time::Duration;

/// Branch used by `git init -b` and as the push target when the current branch is unknown.
pub const DEFAULT_BRANCH: &str = "main";

/// Commit message used by the create workflow when the user leaves the prompt empty.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial project upload";

/// Commit message used by the update workflow when the user leaves the prompt empty.
pub const UPDATE_COMMIT_MESSAGE: &str = "Project update";

/// Upper bound for captured local subprocess calls; pushes and repository creation are
/// not bounded.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(120);

/// Settings shared by the process runner, the clients and the workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program name or path of the GitHub CLI.
    pub gh_program: String,
    /// Program name or path of git.
    pub git_program: String,
    pub default_branch: String,
    pub initial_commit_message: String,
    pub update_commit_message: String,
    pub command_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gh_program: "gh".to_string(),
            git_program: "git".to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            initial_commit_message: INITIAL_COMMIT_MESSAGE.to_string(),
            update_commit_message: UPDATE_COMMIT_MESSAGE.to_string(),
            command_timeout: COMMAND_TIMEOUT,
        }
    }
}
