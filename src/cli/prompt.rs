//! User input.
//!
//! All questions go through the [`Prompter`] trait so that trimming and validation live
//! in one place and the workflows can be driven by a script in tests.

use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// The three kinds of question the workflows ask.
pub trait Prompter {
    /// A free-text answer, trimmed; may be empty.
    fn read_line(&self, prompt: &str) -> Result<String>;

    /// A yes/no answer, defaulting to no.
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Index of the chosen item, or `None` if the user cancelled.
    fn choose(&self, prompt: &str, items: &[&str]) -> Result<Option<usize>>;
}

/// Interactive prompts on the terminal using `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    fn choose(&self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }
}

#[cfg(test)]
pub use scripted::{Answer, ScriptedPrompter};
