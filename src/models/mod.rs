//! Defines the data structures shared by the clients and the workflows.
//!
//! These are the typed views over what `gh` reports (the current user, the outcome of
//! a repository creation) and the parameters the workflows pass to it.

mod github;

pub use github::*;
