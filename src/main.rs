mod api;
mod cli;
mod config;
mod error;
mod files;
mod models;

use api::SystemRunner;
use clap::Parser;
use cli::{App, Cli, TerminalPrompter};
use colored::*;
use config::Config;
use error::Result;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting GitHub automation tool...");
    println!("{}", "=== GitHub Automation Tool ===".cyan().bold());

    let config = Config::default();
    let runner = SystemRunner::new(config.command_timeout);
    let app = App::new(config, runner, TerminalPrompter::new());

    let gh_installed = app.gh_available().await?;
    let interactive = std::io::stdin().is_terminal();
    if let Some(code) = early_exit(gh_installed, interactive) {
        if !gh_installed {
            error!("GitHub CLI not detected");
            println!(
                "{}",
                "GitHub CLI not installed. Please install it from https://cli.github.com/".red()
            );
        } else {
            warn!("stdin is not a terminal");
            println!("{}", "The menu needs an interactive terminal.".yellow());
        }
        return Ok(code);
    }

    app.run().await?;
    Ok(ExitCode::SUCCESS)
}

/// Exit code when the menu cannot be shown; only a missing `gh` is a failure.
fn early_exit(gh_installed: bool, interactive: bool) -> Option<ExitCode> {
    if !gh_installed {
        Some(ExitCode::from(1))
    } else if !interactive {
        Some(ExitCode::SUCCESS)
    } else {
        None
    }
}
