//! Data structures describing GitHub-side entities.

use crate::api::ProcessOutput;
use serde::Deserialize;
use std::fmt;

/// The subset of the `gh api user` record the tool cares about.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GhUser {
    pub login: String,
}

/// Repository visibility, passed to `gh repo create` as a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_private(is_private: bool) -> Self {
        if is_private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// What the user asked to create on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

/// Result of `gh repo create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCreation {
    /// The repository exists; `url` is the web URL used as the `origin` remote.
    Created { url: String },
    /// The current user could not be determined, so nothing was attempted.
    UnknownUser,
    /// `gh` ran but its output did not look like a success.
    Failed(ProcessOutput),
}

/// Web URL of a repository owned by `owner`.
pub fn repo_url(owner: &str, name: &str) -> String {
    format!("https://github.com/{}/{}", owner, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_ignores_extra_fields() {
        let body = r#"{"login":"octocat","id":1,"node_id":"MDQ6VXNlcjE=","type":"User","name":"The Octocat"}"#;
        let user: GhUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.login, "octocat");
    }

    #[test]
    fn test_visibility_flags() {
        assert_eq!(Visibility::from_private(true), Visibility::Private);
        assert_eq!(Visibility::from_private(false).flag(), "--public");
        assert_eq!(Visibility::Private.flag(), "--private");
        assert_eq!(Visibility::Private.to_string(), "private");
    }

    #[test]
    fn test_repo_url() {
        assert_eq!(repo_url("octocat", "demo"), "https://github.com/octocat/demo");
    }
}
