pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::exit;

use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::git::GitCli;
use crate::presentation::ui::display::{error_line, OutputFormat};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// ghbrowse - Turn a git working copy into its GitHub web URL
#[derive(Parser, Debug)]
#[command(name = "ghbrowse")]
#[command(about = "Turn a git working copy into its GitHub web URL")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Working copy to inspect (defaults to current directory)
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub directory: PathBuf,

    /// Git executable to run
    #[arg(long, global = true, default_value = "git")]
    pub git: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which remote and branch to build the URL from
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Remote to use (defaults to origin)
    pub remote: Option<String>,

    /// Branch to link to instead of the checked-out one
    #[arg(short, long)]
    pub branch: Option<BranchName>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the web URL for the current branch (default)
    Url {
        #[command(flatten)]
        target: TargetArgs,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Open the web URL in the default browser
    Open {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// List configured remotes
    Remotes {
        /// Only show fetch entries
        #[arg(long)]
        fetch_only: bool,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub fn run(self) -> Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command() {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{}", error_line(&format!("{:#}", e)));
                exit(1);
            }
        }
    }

    fn git(&self) -> GitCli {
        GitCli::with_executable(&self.cli.git)
    }

    fn handle_command(&self) -> Result<()> {
        use commands::{OpenCommand, RemotesCommand, UrlCommand};

        let repo_path = self.cli.directory.clone();
        match &self.cli.command {
            None => UrlCommand::new(repo_path, None, None, OutputFormat::Text, self.git()).execute(),
            Some(Commands::Url { target, output }) => UrlCommand::new(
                repo_path,
                target.remote.clone(),
                target.branch.clone(),
                *output,
                self.git(),
            )
            .execute(),
            Some(Commands::Open { target }) => OpenCommand::new(
                repo_path,
                target.remote.clone(),
                target.branch.clone(),
                self.git(),
            )
            .execute(),
            Some(Commands::Remotes { fetch_only, output }) => {
                RemotesCommand::new(repo_path, *fetch_only, *output, self.git()).execute()
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
