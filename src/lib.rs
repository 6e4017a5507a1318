//! # ghbrowse - GitHub web URLs from git working copies
//!
//! `ghbrowse` inspects a git working copy, picks one of its remotes, works out the
//! checked-out branch and turns the pair into the GitHub web page for that branch.
//!
//! ## Features
//!
//! - **Remote Listing**: Read `git remote -v` into typed remote entries
//! - **URL Mangling**: Convert SSH, HTTPS and `git://` remote URLs into web URLs
//! - **Branch Detection**: Resolve the current branch via `git symbolic-ref HEAD`
//! - **Browser Launch**: Open the resulting page in the default browser
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the URL of the current branch on origin
//! ghbrowse
//!
//! # Use another remote and branch
//! ghbrowse url upstream --branch main
//!
//! # Open it
//! ghbrowse open
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Remotes, remote URLs and branch names
//! - [`application`]: Use cases combining git inspection and URL mangling
//! - [`infrastructure`]: Child process execution and the git command line
//! - [`presentation`]: CLI interface and output rendering
//! - [`common`]: Shared error handling
//!
//! ## Error Handling
//!
//! - [`common::error::BrowseError`]: Main error type
//! - [`common::result::BrowseResult`]: Type alias for `Result<T, BrowseError>`
//!
//! ## Examples
//!
//! ### Mangling a URL
//!
//! ```rust
//! use ghbrowse::mangle_url;
//!
//! let url = mangle_url("git@github.com:alice/proj.git", "dev").unwrap();
//! assert_eq!(url, "https://github.com/alice/proj/tree/dev");
//! ```
//!
//! ### Resolving a Working Copy
//!
//! ```rust,no_run
//! use ghbrowse::application::use_cases::{ResolveWebUrlConfig, ResolveWebUrlUseCase};
//! use ghbrowse::infrastructure::git::GitCli;
//!
//! # fn example() -> ghbrowse::Result<()> {
//! let git = GitCli::new();
//! let config = ResolveWebUrlConfig::new(".").with_remote("upstream");
//! let resolved = ResolveWebUrlUseCase::new(config, &git).execute()?;
//!
//! println!("{} -> {}", resolved.remote_name, resolved.web_url);
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::BrowseError;
pub use crate::common::result::BrowseResult as Result;
pub use crate::domain::entities::{Remote, RemoteDirection};
pub use crate::domain::value_objects::{mangle_url, BranchName, RemoteUrl};
