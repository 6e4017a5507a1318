use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

use super::branch_name::DEFAULT_BRANCH;

/// Web URLを組み立てられるホストの一覧
///
/// 対応ホストを増やす場合はここに追加する。
pub const SUPPORTED_HOSTS: &[&str] = &["github.com"];

/// `user@host:owner/repo.git`
static SSH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@/:\s]+@([^:/]+):([^/]+)/(.+?)\.git$").expect("SSH remote pattern is valid")
});

/// `https://host/owner/repo.git`; userinfo stays part of the host
static HTTPS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://([^/]+)/([^/]+)/(.+?)\.git$")
        .expect("HTTPS remote pattern is valid")
});

/// `git://host/owner/repo.git`
static GIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^git://([^/]+)/([^/]+)/(.+?)\.git$").expect("git protocol remote pattern is valid")
});

/// RemoteURL関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteUrlError {
    #[error("unsupported remote url: {0}")]
    UnsupportedFormat(String),

    #[error("invalid github host: {0}")]
    UnsupportedHost(String),
}

/// リモートURLの記法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteUrlShape {
    /// `user@host:owner/repo.git`
    Ssh,
    /// `https://host/owner/repo.git`
    Https,
    /// `git://host/owner/repo.git`
    Git,
}

impl RemoteUrlShape {
    /// 判定順に並べた記法と正規表現
    fn patterns() -> [(RemoteUrlShape, &'static Regex); 3] {
        [
            (RemoteUrlShape::Ssh, &*SSH_PATTERN),
            (RemoteUrlShape::Https, &*HTTPS_PATTERN),
            (RemoteUrlShape::Git, &*GIT_PATTERN),
        ]
    }

    /// 表示用の名前
    pub fn label(&self) -> &'static str {
        match self {
            RemoteUrlShape::Ssh => "ssh",
            RemoteUrlShape::Https => "https",
            RemoteUrlShape::Git => "git",
        }
    }
}

/// リモートURLから取り出したホスト・オーナー・リポジトリ名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    shape: RemoteUrlShape,
    host: String,
    owner: String,
    repo: String,
}

impl RemoteUrl {
    /// リモートURLを解析する
    ///
    /// SSH短縮記法、HTTPS、gitプロトコルの順に照合し、最初に一致したものを採用する。
    /// `.git` サフィックスはリポジトリ名から除かれる。
    pub fn parse(url: &str) -> Result<Self, RemoteUrlError> {
        for (shape, pattern) in RemoteUrlShape::patterns() {
            if let Some(captures) = pattern.captures(url) {
                return Ok(Self {
                    shape,
                    host: captures[1].to_string(),
                    owner: captures[2].to_string(),
                    repo: captures[3].to_string(),
                });
            }
        }

        Err(RemoteUrlError::UnsupportedFormat(url.to_string()))
    }

    /// 一致した記法
    pub fn shape(&self) -> RemoteUrlShape {
        self.shape
    }

    /// ホスト名
    pub fn host(&self) -> &str {
        &self.host
    }

    /// オーナー（ユーザーまたは組織）
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// `.git` を除いたリポジトリ名
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// ブランチを指定してWeb URLを生成
    pub fn web_url(&self, branch: &str) -> Result<String, RemoteUrlError> {
        compose_web_url(&self.host, &self.owner, &self.repo, branch)
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)
    }
}

impl TryFrom<&str> for RemoteUrl {
    type Error = RemoteUrlError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        RemoteUrl::parse(url)
    }
}

/// ホストが対応ホストかどうか
pub fn is_supported_host(host: &str) -> bool {
    SUPPORTED_HOSTS.contains(&host)
}

/// ホスト・オーナー・リポジトリ・ブランチからWeb URLを組み立てる
///
/// ブランチが `master` の場合はブランチ部分を付けない。
/// `main` など他の名前は既定ブランチであっても `/tree/{branch}` が付く。
pub fn compose_web_url(
    host: &str,
    owner: &str,
    repo: &str,
    branch: &str,
) -> Result<String, RemoteUrlError> {
    if !is_supported_host(host) {
        return Err(RemoteUrlError::UnsupportedHost(host.to_string()));
    }

    if branch == DEFAULT_BRANCH {
        Ok(format!("https://{}/{}/{}", host, owner, repo))
    } else {
        Ok(format!("https://{}/{}/{}/tree/{}", host, owner, repo, branch))
    }
}

/// リモートURLとブランチ名をWeb URLに変換する
pub fn mangle_url(url: &str, branch: &str) -> Result<String, RemoteUrlError> {
    RemoteUrl::parse(url)?.web_url(branch)
}
