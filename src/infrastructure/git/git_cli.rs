use super::git_interface::RepositoryInspector;
use crate::domain::entities::remote::{parse_remote_listing, Remote};
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::process::{
    CommandExecutor, CommandExecutorError, ExecutionConfig, StderrMode,
};
use std::path::Path;
use tracing::{debug, warn};

/// [`RepositoryInspector`] backed by the `git` command line tool
#[derive(Debug, Clone)]
pub struct GitCli {
    executor: CommandExecutor,
    stderr: StderrMode,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            executor: CommandExecutor::new("git"),
            stderr: StderrMode::Inherit,
        }
    }
}

impl GitCli {
    /// Create a new instance using `git` from `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new instance with a custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executor: CommandExecutor::new(executable),
            ..Self::default()
        }
    }

    /// Choose what happens to git's stderr
    pub fn with_stderr(mut self, stderr: StderrMode) -> Self {
        self.stderr = stderr;
        self
    }

    /// The git executable in use
    pub fn executable(&self) -> &str {
        self.executor.program()
    }

    fn config_for(&self, repo_path: &Path) -> ExecutionConfig {
        ExecutionConfig::new()
            .with_working_directory(repo_path)
            .with_stderr(self.stderr)
    }
}

impl RepositoryInspector for GitCli {
    fn list_remotes(&self, repo_path: &Path) -> Result<Vec<Remote>, CommandExecutorError> {
        let result = self
            .executor
            .execute(&["remote", "-v"], &self.config_for(repo_path))?
            .into_checked()?;

        let remotes = parse_remote_listing(&result.stdout_lines);
        debug!(
            path = %repo_path.display(),
            lines = result.stdout_lines.len(),
            remotes = remotes.len(),
            "Listed remotes"
        );
        Ok(remotes)
    }

    fn detect_branch(&self, repo_path: &Path) -> Result<BranchName, CommandExecutorError> {
        let result = match self
            .executor
            .execute(&["symbolic-ref", "HEAD"], &self.config_for(repo_path))
        {
            Ok(result) => result,
            Err(e @ CommandExecutorError::ReadFailed { .. }) => return Err(e),
            Err(e) => {
                warn!("{}; assuming the default branch", e);
                return Ok(BranchName::default());
            }
        };

        if !result.success() {
            // detached HEAD or not a symbolic ref
            debug!(exit_code = ?result.exit_code, "symbolic-ref failed; using default branch");
            return Ok(BranchName::default());
        }

        let branch = result
            .stdout_lines
            .iter()
            .find_map(|line| BranchName::from_symbolic_ref(line))
            .unwrap_or_default();

        debug!(path = %repo_path.display(), branch = %branch, "Detected branch");
        Ok(branch)
    }
}
