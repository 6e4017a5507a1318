use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::common::error::BrowseError;
use crate::common::result::{BrowseResult, OptionExt};
use crate::domain::entities::remote::{remote_names, select_remote, Remote};
use crate::domain::value_objects::branch_name::BranchName;
use crate::domain::value_objects::remote_url::RemoteUrl;
use crate::infrastructure::git::RepositoryInspector;

/// Web URL解決の設定
#[derive(Debug, Clone)]
pub struct ResolveWebUrlConfig {
    /// 対象の作業ディレクトリ
    pub repo_path: PathBuf,

    /// 使用するリモート名（Noneの場合は自動選択）
    pub remote_name: Option<String>,

    /// ブランチの明示指定（Noneの場合は検出）
    pub branch: Option<BranchName>,
}

impl ResolveWebUrlConfig {
    /// 新しい設定を作成
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            remote_name: None,
            branch: None,
        }
    }

    /// リモート名を指定
    pub fn with_remote(mut self, remote_name: impl Into<String>) -> Self {
        self.remote_name = Some(remote_name.into());
        self
    }

    /// ブランチを指定
    pub fn with_branch(mut self, branch: BranchName) -> Self {
        self.branch = Some(branch);
        self
    }
}

/// 解決結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedWebUrl {
    /// 使用したリモート名
    pub remote_name: String,

    /// リモートのURL
    pub remote_url: String,

    /// 使用したブランチ
    pub branch: BranchName,

    /// ブラウザで開けるURL
    pub web_url: String,
}

/// 作業ディレクトリのリモートとブランチからWeb URLを求めるユースケース
pub struct ResolveWebUrlUseCase<'a, G: RepositoryInspector> {
    config: ResolveWebUrlConfig,
    inspector: &'a G,
}

impl<'a, G: RepositoryInspector> ResolveWebUrlUseCase<'a, G> {
    /// 新しいユースケースインスタンスを作成
    pub fn new(config: ResolveWebUrlConfig, inspector: &'a G) -> Self {
        Self { config, inspector }
    }

    /// URLを解決する
    pub fn execute(&self) -> BrowseResult<ResolvedWebUrl> {
        let repo_path = &self.config.repo_path;
        let remotes = self.inspector.list_remotes(repo_path)?;
        if remotes.is_empty() {
            return Err(BrowseError::no_remotes(repo_path));
        }

        let remote = self.select(&remotes)?;
        debug!(remote = %remote.name, url = %remote.url, "Selected remote");

        let branch = match &self.config.branch {
            Some(branch) => branch.clone(),
            None => self.inspector.detect_branch(repo_path)?,
        };

        let parsed = RemoteUrl::parse(&remote.url)?;
        debug!(shape = parsed.shape().label(), repository = %parsed, "Parsed remote URL");

        let web_url = parsed.web_url(branch.as_str())?;
        info!(web_url = %web_url, "Resolved web URL");

        Ok(ResolvedWebUrl {
            remote_name: remote.name.clone(),
            remote_url: remote.url.clone(),
            branch,
            web_url,
        })
    }

    fn select<'r>(&self, remotes: &'r [Remote]) -> BrowseResult<&'r Remote> {
        let name = self.config.remote_name.as_deref();
        select_remote(remotes, name).ok_or_browse_else(|| {
            BrowseError::remote_not_found(name.unwrap_or_default(), remote_names(remotes))
        })
    }
}
