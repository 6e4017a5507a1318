use crate::domain::value_objects::branch_name::BranchNameError;
use crate::domain::value_objects::remote_url::RemoteUrlError;
use crate::infrastructure::process::CommandExecutorError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    /// Starting git, reading its output, or git exiting non-zero
    #[error(transparent)]
    Command(#[from] CommandExecutorError),

    /// The remote URL has an unknown shape or points at an unsupported host
    #[error(transparent)]
    RemoteUrl(#[from] RemoteUrlError),

    #[error("Invalid branch name: {0}")]
    BranchName(#[from] BranchNameError),

    #[error("No remotes configured in {}", path.display())]
    NoRemotes { path: PathBuf },

    #[error("Remote not found: {name} (available: {})", available.join(", "))]
    RemoteNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Failed to open {url} in a browser: {source}")]
    BrowserError {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BrowseError {
    pub fn no_remotes(path: impl Into<PathBuf>) -> Self {
        Self::NoRemotes { path: path.into() }
    }

    pub fn remote_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::RemoteNotFound {
            name: name.into(),
            available,
        }
    }

    pub fn browser_error(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::BrowserError {
            url: url.into(),
            source,
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for BrowseError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}

impl From<serde_yaml::Error> for BrowseError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization_error_with_source("YAML serialization failed", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_url_errors_pass_through() {
        let error: BrowseError = RemoteUrlError::UnsupportedHost("gitlab.com".to_string()).into();
        assert!(matches!(
            error,
            BrowseError::RemoteUrl(RemoteUrlError::UnsupportedHost(_))
        ));
        assert_eq!(error.to_string(), "invalid github host: gitlab.com");
    }

    #[test]
    fn test_command_errors_pass_through() {
        let error: BrowseError = CommandExecutorError::CommandFailed {
            command: "git remote -v".to_string(),
            exit_code: Some(128),
        }
        .into();
        assert_eq!(error.to_string(), "`git remote -v` exited with exit code 128");
    }

    #[test]
    fn test_remote_not_found_lists_available() {
        let error = BrowseError::remote_not_found(
            "upstream",
            vec!["origin".to_string(), "fork".to_string()],
        );
        assert_eq!(
            error.to_string(),
            "Remote not found: upstream (available: origin, fork)"
        );
    }

    #[test]
    fn test_no_remotes_with_path() {
        let error = BrowseError::no_remotes("/work/proj");
        if let BrowseError::NoRemotes { path } = &error {
            assert_eq!(path, &PathBuf::from("/work/proj"));
        } else {
            panic!("Expected NoRemotes");
        }
        assert_eq!(error.to_string(), "No remotes configured in /work/proj");
    }

    #[test]
    fn test_error_conversion_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: BrowseError = json_error.into();
        assert!(matches!(error, BrowseError::SerializationError { .. }));
    }
}
