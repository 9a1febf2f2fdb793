//! Provides the clients for the external tools the application drives.
//!
//! Includes:
//! - `runner`: process execution (`ProcessRunner`, `SystemRunner`) and captured output.
//! - `detect`: substring predicates that judge `gh`/`git` output.
//! - `gh`: client for the GitHub CLI.
//! - `git`: client for the git binary, bound to a project directory.

pub mod detect;
mod gh;
mod git;
#[cfg(test)]
pub mod mock;
mod runner;

pub use gh::*;
pub use git::*;
pub use runner::*;
