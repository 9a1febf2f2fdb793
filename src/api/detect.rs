//! Output heuristics.
//!
//! `gh` and `git` are judged by fixed substrings in their combined output rather than
//! by exit codes. The checks are deliberately literal, false positives included
//! (e.g. a pushed branch named `error-pages` reads as a failed push).

/// `gh --version` prints `gh version X.Y.Z (date)`.
pub fn gh_installed(output: &str) -> bool {
    output.contains("gh version")
}

pub fn looks_authenticated(output: &str) -> bool {
    output.contains("Logged in to github.com")
}

pub fn repo_created(output: &str) -> bool {
    output.contains("Created repository") || output.contains("https://github.com/")
}

/// Also true for `nothing to commit`, so re-running on a clean tree still proceeds to push.
pub fn commit_succeeded(output: &str) -> bool {
    output.contains("file changed")
        || output.contains("files changed")
        || output.contains("nothing to commit")
}

pub fn push_succeeded(output: &str) -> bool {
    !output.contains("error")
}

/// git aborted the command (bad pathspec, not a repository, ...).
pub fn git_fatal(output: &str) -> bool {
    output.contains("fatal:")
}

/// Any mention of `origin` in `git remote -v`.
pub fn has_origin_remote(output: &str) -> bool {
    output.contains("origin")
}
