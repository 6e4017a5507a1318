use crate::domain::entities::remote::Remote;
use crate::domain::value_objects::branch_name::BranchName;
use crate::infrastructure::process::CommandExecutorError;
use std::path::Path;

/// Read-only view of a working copy's remotes and checked-out branch
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryInspector {
    /// List configured remotes in the order git reports them.
    ///
    /// Fails if git cannot be started, its output cannot be read, or it exits
    /// non-zero.
    fn list_remotes(&self, repo_path: &Path) -> Result<Vec<Remote>, CommandExecutorError>;

    /// Name of the checked-out branch.
    ///
    /// Falls back to `master` when git cannot be started, exits non-zero
    /// (detached HEAD) or prints nothing usable. Only a failure while reading
    /// git's output is returned as an error.
    fn detect_branch(&self, repo_path: &Path) -> Result<BranchName, CommandExecutorError>;
}
