use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::url::resolve;
use crate::common::error::BrowseError;
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::git::GitCli;

/// Handler for the open command
pub struct OpenCommand {
    pub repo_path: PathBuf,
    pub remote: Option<String>,
    pub branch: Option<BranchName>,
    pub git: GitCli,
}

impl OpenCommand {
    pub fn new(
        repo_path: PathBuf,
        remote: Option<String>,
        branch: Option<BranchName>,
        git: GitCli,
    ) -> Self {
        Self {
            repo_path,
            remote,
            branch,
            git,
        }
    }

    pub fn execute(&self) -> Result<()> {
        let resolved = resolve(
            &self.repo_path,
            self.remote.as_deref(),
            self.branch.as_ref(),
            &self.git,
        )?;

        info!(url = %resolved.web_url, "Opening browser");
        open::that(&resolved.web_url)
            .map_err(|e| BrowseError::browser_error(&resolved.web_url, e))?;

        println!("{} {}", "Opened".green().bold(), resolved.web_url);
        Ok(())
    }
}
