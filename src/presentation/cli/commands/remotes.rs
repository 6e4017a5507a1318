use anyhow::Result;
use std::path::PathBuf;

use crate::application::use_cases::{ListRemotesConfig, ListRemotesUseCase};
use crate::infrastructure::git::GitCli;
use crate::presentation::ui::display::{render_remotes, OutputFormat};

/// Handler for the remotes command
pub struct RemotesCommand {
    pub repo_path: PathBuf,
    pub fetch_only: bool,
    pub output: OutputFormat,
    pub git: GitCli,
}

impl RemotesCommand {
    pub fn new(repo_path: PathBuf, fetch_only: bool, output: OutputFormat, git: GitCli) -> Self {
        Self {
            repo_path,
            fetch_only,
            output,
            git,
        }
    }

    pub fn execute(&self) -> Result<()> {
        let config = ListRemotesConfig::new(&self.repo_path).with_fetch_only(self.fetch_only);
        let remotes = ListRemotesUseCase::new(config, &self.git).execute()?;

        let rendered = render_remotes(&remotes, self.output)?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        Ok(())
    }
}
