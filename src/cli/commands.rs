use crate::api::{detect, GhClient, GitClient, Outcome, ProcessRunner};
use crate::cli::prompt::Prompter;
use crate::cli::ui;
use crate::config::Config;
use crate::error::Result;
use crate::files::{list_directory, parse_selection, FileReport, FileTag, UpdateScope};
use crate::models::{RepoCreation, RepoSpec, Visibility};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Interactive helper that creates and updates GitHub projects through `gh` and `git`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Create a GitHub repository and upload a local directory to it
    CreateProject,
    /// Commit and push changes of an existing local repository
    UpdateProject,
    /// Show the `gh` authentication status
    AuthStatus,
    /// Log in to GitHub through the browser
    Login,
    Exit,
}

impl Commands {
    /// Menu order; the number shown next to each entry comes from [`Commands::number`].
    pub const MENU: [Commands; 5] = [
        Commands::CreateProject,
        Commands::UpdateProject,
        Commands::AuthStatus,
        Commands::Login,
        Commands::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Commands::CreateProject => 1,
            Commands::UpdateProject => 2,
            Commands::AuthStatus => 3,
            Commands::Login => 4,
            Commands::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Commands::CreateProject => "Create a new project",
            Commands::UpdateProject => "Update an existing project",
            Commands::AuthStatus => "Check authentication status",
            Commands::Login => "Login to GitHub",
            Commands::Exit => "Exit",
        }
    }

    fn needs_auth(self) -> bool {
        matches!(self, Commands::CreateProject | Commands::UpdateProject)
    }
}

/// CLI application
pub struct App<R, P> {
    config: Config,
    runner: R,
    prompter: P,
}

impl<R: ProcessRunner, P: Prompter> App<R, P> {
    pub fn new(config: Config, runner: R, prompter: P) -> Self {
        Self {
            config,
            runner,
            prompter,
        }
    }

    fn gh(&self) -> GhClient<'_, R> {
        GhClient::new(&self.runner, &self.config.gh_program)
    }

    fn git(&self, dir: &Path) -> GitClient<'_, R> {
        GitClient::new(&self.runner, &self.config.git_program, dir)
    }

    /// Whether the GitHub CLI is installed; the tool cannot do anything without it.
    pub async fn gh_available(&self) -> Result<bool> {
        self.gh().is_installed().await
    }

    /// Main interactive loop, until the user picks Exit or cancels the menu.
    pub async fn run(&self) -> Result<()> {
        let items: Vec<String> = Commands::MENU
            .iter()
            .map(|c| format!("{}. {}", c.number(), c.label()))
            .collect();
        let items: Vec<&str> = items.iter().map(String::as_str).collect();

        loop {
            let command = self
                .prompter
                .choose("Select an action", &items)?
                .and_then(|index| Commands::MENU.get(index).copied())
                .unwrap_or(Commands::Exit);

            if command == Commands::Exit {
                println!("{}", "Exiting program.".green());
                break;
            }

            println!("\n---\n");

            if let Err(e) = self.run_command(command).await {
                error!("Command execution failed: {:?}", e);
                println!(
                    "{} {}",
                    "Error executing command:".red(),
                    e.to_string().red()
                );
            }

            println!("\n---\n");
        }

        Ok(())
    }

    /// Runs a single menu action.
    ///
    /// Create and update first make sure `gh` is authenticated, trying one login.
    pub async fn run_command(&self, command: Commands) -> Result<()> {
        info!("Running {:?}", command);

        if command.needs_auth() && !self.ensure_authenticated().await? {
            println!("{}", "GitHub authentication failed.".red());
            return Ok(());
        }

        match command {
            Commands::CreateProject => self.create_project().await?,
            Commands::UpdateProject => self.update_project().await?,
            Commands::AuthStatus => self.show_auth_status().await?,
            Commands::Login => {
                self.authenticate().await?;
            },
            Commands::Exit => {},
        }

        Ok(())
    }

    async fn ensure_authenticated(&self) -> Result<bool> {
        if self.gh().is_authenticated().await? {
            return Ok(true);
        }
        println!("{}", "GitHub authentication required.".yellow());
        self.authenticate().await
    }

    /// Logs in through the browser unless already authenticated.
    pub async fn authenticate(&self) -> Result<bool> {
        let gh = self.gh();
        println!("GitHub authentication in progress...");

        if gh.is_authenticated().await? {
            if let Some(user) = gh.current_user().await? {
                println!("Already authenticated with GitHub as: {}", user.login.bold());
            }
            return Ok(true);
        }

        println!("Opening browser for GitHub authentication...");
        let login = gh.login().await?;
        if !login.success() {
            debug!("gh auth login exited with {:?}", login.code);
        }

        if gh.is_authenticated().await? {
            println!("{}", "Authentication successful!".green());
            if let Some(user) = gh.current_user().await? {
                println!("Logged in as: {}", user.login.bold());
            }
            Ok(true)
        } else {
            println!("{}", "Authentication failed. Please try again.".red());
            Ok(false)
        }
    }

    async fn show_auth_status(&self) -> Result<()> {
        let gh = self.gh();
        println!("Checking GitHub authentication status...");

        let status = gh.auth_status().await?.combined();
        println!("{}", status.trim_end());

        if detect::looks_authenticated(&status) {
            if let Some(user) = gh.current_user().await? {
                println!("Currently logged in as: {}", user.login.bold());
            }
        }
        Ok(())
    }

    async fn create_project(&self) -> Result<()> {
        println!("{}", "=== Create a New Project ===".cyan().bold());

        let name = self.prompter.read_line("Enter repository name")?;
        if name.is_empty() {
            println!("{}", "Repository name cannot be empty.".red());
            return Ok(());
        }
        let description = self.prompter.read_line("Enter repository description")?;
        let visibility = Visibility::from_private(self.prompter.confirm("Private repository?")?);
        let repo = RepoSpec {
            name,
            description,
            visibility,
        };

        let spinner = ui::spinner(&format!("Creating repository '{}'...", repo.name))?;
        let creation = self.gh().create_repository(&repo).await;
        spinner.finish_and_clear();

        let url = match creation? {
            RepoCreation::Created { url } => url,
            RepoCreation::UnknownUser => {
                println!("{}", "Failed to determine GitHub username.".red());
                println!("{}", "Repository creation failed.".red());
                return Ok(());
            },
            RepoCreation::Failed(output) => {
                println!(
                    "{} {}",
                    "Error creating repository:".red(),
                    output.combined().trim_end()
                );
                println!("{}", "Repository creation failed.".red());
                return Ok(());
            },
        };
        println!("{} {}", "Repository created successfully:".green(), url);

        let path = self.prompter.read_line("Enter local project directory path")?;
        if path.is_empty() {
            println!("{}", "No directory given. Project creation canceled.".yellow());
            return Ok(());
        }
        let dir = PathBuf::from(path);
        if !dir.exists() {
            if self.prompter.confirm("Directory doesn't exist. Create it?")? {
                fs::create_dir_all(&dir)?;
                info!("Created directory {}", dir.display());
            } else {
                println!("{}", "Project creation canceled.".yellow());
                return Ok(());
            }
        }

        let git = self.git(&dir);
        self.initialize_repository(&git, &url).await?;

        let select = self
            .prompter
            .confirm("Do you want to select specific files to upload?")?;
        let message = self.commit_message(&self.config.initial_commit_message)?;

        let outcome = if select {
            let files = match list_directory(&dir) {
                Ok(files) => files,
                Err(e) => {
                    println!("{} {}", "Error listing files:".red(), e);
                    return Ok(());
                },
            };
            if files.is_empty() {
                println!("{}", "No files found in directory.".yellow());
                return Ok(());
            }

            println!("Available files:");
            println!(
                "{}",
                ui::file_table(files.iter().map(|f| (f.as_str(), None::<FileTag>)))
            );

            let selected = self.select_files(&files)?;
            if selected.is_empty() {
                println!("{}", "No files selected. Project creation canceled.".yellow());
                return Ok(());
            }
            git.commit_selected(&selected, &message).await?
        } else {
            git.commit_all(&message).await?
        };

        if self.publish(&git, outcome).await? {
            println!(
                "{}",
                "Project successfully created and uploaded to GitHub!"
                    .green()
                    .bold()
            );
        }
        Ok(())
    }

    async fn update_project(&self) -> Result<()> {
        println!("{}", "=== Update Existing Project ===".cyan().bold());

        let path = self.prompter.read_line("Enter local project directory path")?;
        let dir = PathBuf::from(&path);
        if path.is_empty() || !dir.exists() {
            println!("{}", "Directory doesn't exist.".red());
            return Ok(());
        }

        let git = self.git(&dir);
        if !git.is_repository() {
            println!("{}", "The directory is not a Git repository.".red());
            return Ok(());
        }

        let select = self
            .prompter
            .confirm("Do you want to select specific files to update?")?;
        let message = self.commit_message(&self.config.update_commit_message)?;

        let outcome = if select {
            let status = git.short_status().await?;
            println!("Current git status:");
            println!("{}", status.trim_end());

            let scopes: Vec<&str> = UpdateScope::ALL.iter().map(|s| s.label()).collect();
            let Some(scope) = self
                .prompter
                .choose("Which files do you want to pick from?", &scopes)?
                .and_then(|index| UpdateScope::ALL.get(index).copied())
            else {
                println!("{}", "Update canceled.".yellow());
                return Ok(());
            };

            let report = FileReport::from_reports(
                &git.untracked_files().await?,
                &git.modified_files().await?,
            );
            if report.is_empty() {
                println!("{}", "No new or modified files found.".yellow());
                return Ok(());
            }
            let candidates = report.candidates(scope);
            debug!(
                "{} new, {} modified, {} candidates for {:?}",
                report.new_files.len(),
                report.changed_files.len(),
                candidates.len(),
                scope
            );
            if candidates.is_empty() {
                println!("{}", "No files of that kind found.".yellow());
                return Ok(());
            }

            println!("Available files:");
            println!(
                "{}",
                ui::file_table(
                    candidates
                        .iter()
                        .map(|f| (f.as_str(), Some(report.tag(f))))
                )
            );

            let selected = self.select_files(&candidates)?;
            if selected.is_empty() {
                println!("{}", "No files selected. Update canceled.".yellow());
                return Ok(());
            }
            git.commit_selected(&selected, &message).await?
        } else {
            git.commit_all(&message).await?
        };

        if self.publish(&git, outcome).await? {
            println!(
                "{}",
                "Project successfully updated and changes uploaded to GitHub!"
                    .green()
                    .bold()
            );
        }
        Ok(())
    }

    /// `git init` (or reuse of an existing repository) plus the `origin` remote.
    async fn initialize_repository(&self, git: &GitClient<'_, R>, url: &str) -> Result<()> {
        if !git.is_repository() {
            println!("Initializing Git repository...");
            git.init(&self.config.default_branch).await?;
        } else {
            println!("Git repository already exists, checking current branch...");
            let branch = git.current_branch().await?;
            if !branch.is_empty() {
                println!("Using existing branch: {}", branch);
            }
        }

        if git.set_origin(url).await? {
            println!("Remote 'origin' already exists, updated URL.");
        } else {
            println!("Added remote 'origin'.");
        }
        Ok(())
    }

    fn commit_message(&self, default: &str) -> Result<String> {
        let message = self
            .prompter
            .read_line("Enter commit message (leave empty for auto-commit)")?;
        Ok(if message.is_empty() {
            default.to_string()
        } else {
            message
        })
    }

    fn select_files(&self, candidates: &[String]) -> Result<Vec<String>> {
        let selection = self.prompter.read_line(
            "Enter file numbers to add (comma-separated, e.g., 1,3,5), or 'all' to select all",
        )?;
        let selected = parse_selection(&selection, candidates);

        if !selected.is_empty() {
            println!("Selected files:");
            for file in &selected {
                println!("- {}", file);
            }
        }
        Ok(selected)
    }

    /// Reports the commit outcome and pushes. Returns whether both steps succeeded.
    async fn publish(&self, git: &GitClient<'_, R>, commit: Outcome) -> Result<bool> {
        if !commit.succeeded {
            println!("{}", "Error creating commit.".red());
            println!("{}", commit.output.combined().trim_end());
            return Ok(false);
        }

        let mut branch = git.current_branch().await?;
        if branch.is_empty() {
            branch = self.config.default_branch.clone();
        }
        println!("Pushing to branch: {}", branch.bold());
        info!("Pushing {} from {}", branch, git.workdir().display());

        let spinner = ui::spinner("Pushing changes...")?;
        let pushed = git.push(&branch).await;
        spinner.finish_and_clear();
        let pushed = pushed?;

        if !pushed.succeeded {
            println!("{}", "Error pushing changes to remote repository.".red());
            println!("{}", pushed.output.combined().trim_end());
            return Ok(false);
        }
        Ok(true)
    }
}
