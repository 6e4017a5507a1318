use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 検出できない場合に使う既定ブランチ名
pub const DEFAULT_BRANCH: &str = "master";

static SYMBOLIC_REF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^refs/heads/(.+)$").expect("symbolic-ref pattern is valid")
});

/// BranchName関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum BranchNameError {
    #[error("Branch name cannot be empty")]
    Empty,

    #[error("Invalid character in branch name: {0:?}")]
    InvalidCharacter(char),

    #[error("Branch name cannot start with '-': {0}")]
    StartsWithHyphen(String),
}

/// Gitブランチ名の値オブジェクト
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName {
    name: String,
}

impl BranchName {
    /// 新しいBranchNameインスタンスを作成
    pub fn new(name: &str) -> Result<Self, BranchNameError> {
        Self::validate(name)?;
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// URLに埋め込めない名前を弾く
    fn validate(name: &str) -> Result<(), BranchNameError> {
        if name.is_empty() {
            return Err(BranchNameError::Empty);
        }

        if name.starts_with('-') {
            return Err(BranchNameError::StartsWithHyphen(name.to_string()));
        }

        let invalid = name.chars().find(|ch| {
            ch.is_control()
                || ch.is_whitespace()
                || matches!(ch, '~' | '^' | ':' | '?' | '*' | '[' | '\\')
        });
        if let Some(ch) = invalid {
            return Err(BranchNameError::InvalidCharacter(ch));
        }

        Ok(())
    }

    /// `git symbolic-ref HEAD` の出力行からブランチ名を取り出す
    ///
    /// `refs/heads/{name}` 形式でない行には `None` を返す。
    pub fn from_symbolic_ref(line: &str) -> Option<Self> {
        SYMBOLIC_REF_PATTERN
            .captures(line)
            .map(|captures| Self {
                name: captures[1].to_string(),
            })
    }

    /// ブランチ名を文字列として取得
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// ブランチ名を所有権付きで取得
    pub fn into_string(self) -> String {
        self.name
    }

    /// 既定ブランチ（`master`）かどうか
    pub fn is_default_branch(&self) -> bool {
        self.name == DEFAULT_BRANCH
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self {
            name: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for BranchName {
    type Err = BranchNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BranchName::new(s)
    }
}

impl TryFrom<String> for BranchName {
    type Error = BranchNameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        BranchName::new(&name)
    }
}

impl From<BranchName> for String {
    fn from(branch: BranchName) -> Self {
        branch.name
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbolic_ref() {
        let branch = BranchName::from_symbolic_ref("refs/heads/feature-x").unwrap();
        assert_eq!(branch.as_str(), "feature-x");
    }

    #[test]
    fn test_from_symbolic_ref_keeps_slashes() {
        let branch = BranchName::from_symbolic_ref("refs/heads/feature/login").unwrap();
        assert_eq!(branch.as_str(), "feature/login");
    }

    #[test]
    fn test_from_symbolic_ref_rejects_other_refs() {
        assert!(BranchName::from_symbolic_ref("").is_none());
        assert!(BranchName::from_symbolic_ref("refs/heads/").is_none());
        assert!(BranchName::from_symbolic_ref("refs/remotes/origin/main").is_none());
        assert!(BranchName::from_symbolic_ref("fatal: ref HEAD is not a symbolic ref").is_none());
    }

    #[test]
    fn test_default_is_master() {
        let branch = BranchName::default();
        assert_eq!(branch.as_str(), "master");
        assert!(branch.is_default_branch());
        assert!(!BranchName::new("main").unwrap().is_default_branch());
    }

    #[test]
    fn test_validation() {
        assert!(BranchName::new("feature/login").is_ok());
        assert_eq!(BranchName::new(""), Err(BranchNameError::Empty));
        assert!(matches!(
            BranchName::new("-x"),
            Err(BranchNameError::StartsWithHyphen(_))
        ));
        assert_eq!(
            BranchName::new("has space"),
            Err(BranchNameError::InvalidCharacter(' '))
        );
        assert_eq!(
            BranchName::new("a:b"),
            Err(BranchNameError::InvalidCharacter(':'))
        );
    }

    #[test]
    fn test_parse_and_display() {
        let branch: BranchName = "dev".parse().unwrap();
        assert_eq!(branch.to_string(), "dev");
        assert_eq!(String::from(branch), "dev");
    }

    #[test]
    fn test_serde_round_trip_uses_plain_string() {
        let branch = BranchName::new("dev").unwrap();
        let json = serde_json::to_string(&branch).unwrap();
        assert_eq!(json, "\"dev\"");

        let invalid: Result<BranchName, _> = serde_json::from_str("\"\"");
        assert!(invalid.is_err());
    }
}
