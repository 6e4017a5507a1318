pub mod branch_name;
pub mod remote_url;

pub use branch_name::{BranchName, BranchNameError, DEFAULT_BRANCH};
pub use remote_url::{mangle_url, RemoteUrl, RemoteUrlError};
