use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::application::use_cases::{ResolveWebUrlConfig, ResolveWebUrlUseCase, ResolvedWebUrl};
use crate::common::error::BrowseError;
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::git::GitCli;
use crate::presentation::ui::display::{render_resolved, OutputFormat};

/// Handler for the url command
pub struct UrlCommand {
    pub repo_path: PathBuf,
    pub remote: Option<String>,
    pub branch: Option<BranchName>,
    pub output: OutputFormat,
    pub git: GitCli,
}

impl UrlCommand {
    pub fn new(
        repo_path: PathBuf,
        remote: Option<String>,
        branch: Option<BranchName>,
        output: OutputFormat,
        git: GitCli,
    ) -> Self {
        Self {
            repo_path,
            remote,
            branch,
            output,
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
        println!("{}", render_resolved(&resolved, self.output)?);
        Ok(())
    }
}

/// Shared by `url` and `open`
pub(crate) fn resolve(
    repo_path: &Path,
    remote: Option<&str>,
    branch: Option<&BranchName>,
    git: &GitCli,
) -> Result<ResolvedWebUrl> {
    let mut config = ResolveWebUrlConfig::new(repo_path);
    if let Some(remote) = remote {
        config = config.with_remote(remote);
    }
    if let Some(branch) = branch {
        config = config.with_branch(branch.clone());
    }

    match ResolveWebUrlUseCase::new(config, git).execute() {
        Ok(resolved) => Ok(resolved),
        Err(BrowseError::NoRemotes { path }) => Err(anyhow::anyhow!(
            "No remotes configured in {}\nAdd one with `git remote add origin <url>`",
            path.display()
        )),
        Err(e) => Err(e.into()),
    }
}
