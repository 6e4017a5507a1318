use std::path::{Path, PathBuf};
use tracing::debug;

use crate::common::result::BrowseResult;
use crate::domain::entities::remote::Remote;
use crate::infrastructure::git::RepositoryInspector;

/// リモート一覧取得の設定
#[derive(Debug, Clone)]
pub struct ListRemotesConfig {
    /// 対象の作業ディレクトリ
    pub repo_path: PathBuf,

    /// fetch用のエントリのみを返すか
    pub fetch_only: bool,
}

impl ListRemotesConfig {
    /// 新しい設定を作成
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            fetch_only: false,
        }
    }

    /// fetch用のエントリに絞る
    pub fn with_fetch_only(mut self, fetch_only: bool) -> Self {
        self.fetch_only = fetch_only;
        self
    }
}

/// 作業ディレクトリに設定されたリモートを列挙するユースケース
pub struct ListRemotesUseCase<'a, G: RepositoryInspector> {
    config: ListRemotesConfig,
    inspector: &'a G,
}

impl<'a, G: RepositoryInspector> ListRemotesUseCase<'a, G> {
    /// 新しいユースケースインスタンスを作成
    pub fn new(config: ListRemotesConfig, inspector: &'a G) -> Self {
        Self { config, inspector }
    }

    /// リモートを列挙する（gitの出力順）
    pub fn execute(&self) -> BrowseResult<Vec<Remote>> {
        let mut remotes = self.inspector.list_remotes(&self.config.repo_path)?;
        if self.config.fetch_only {
            remotes.retain(Remote::is_fetch);
        }
        debug!(count = remotes.len(), "Listed remotes");
        Ok(remotes)
    }
}
