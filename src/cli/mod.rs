//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the menu actions and the workflows behind them (`commands`), user input
//! (`prompt`) and terminal presentation (`ui`).

mod commands;
pub mod prompt;
pub mod ui;

pub use commands::*;
pub use prompt::TerminalPrompter;
