/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Git inspection through the `git` command line tool
/// - Process execution (synchronous command runner with scoped child cleanup)
pub mod git;
pub mod process;

// Re-export commonly used types
pub use git::{GitCli, RepositoryInspector};
pub use process::CommandExecutor;
