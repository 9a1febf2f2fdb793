//! File selection logic: which files a commit should contain.
//!
//! - `selection`: parses user input such as `1,3,5` or `all` against a candidate list.
//! - `status`: classifies git's untracked/modified listings into candidate sets.
//! - `listing`: lists a project directory for the create workflow.

mod listing;
mod selection;
mod status;

pub use listing::*;
pub use selection::*;
pub use status::*;
