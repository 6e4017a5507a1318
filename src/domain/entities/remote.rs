use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 名前を指定しなかった場合に優先するリモート名
pub const DEFAULT_REMOTE: &str = "origin";

/// `git remote -v` の1行: `<name> <url> (<direction>)`
static LISTING_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+\((\S+)\)").expect("remote listing pattern is valid")
});

/// リモートURLの用途
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RemoteDirection {
    Fetch,
    Push,
    Other(String),
}

impl RemoteDirection {
    /// 表示用の名前
    pub fn label(&self) -> &str {
        match self {
            RemoteDirection::Fetch => "fetch",
            RemoteDirection::Push => "push",
            RemoteDirection::Other(value) => value.as_str(),
        }
    }
}

impl From<&str> for RemoteDirection {
    fn from(value: &str) -> Self {
        match value {
            "fetch" => RemoteDirection::Fetch,
            "push" => RemoteDirection::Push,
            other => RemoteDirection::Other(other.to_string()),
        }
    }
}

impl From<String> for RemoteDirection {
    fn from(value: String) -> Self {
        RemoteDirection::from(value.as_str())
    }
}

impl From<RemoteDirection> for String {
    fn from(direction: RemoteDirection) -> Self {
        direction.label().to_string()
    }
}

impl fmt::Display for RemoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// リモートリポジトリの情報
///
/// `git remote -v` の1行に対応する。同じ名前のリモートが fetch と push の
/// 2件として現れることがある。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    /// リモート名（例: origin）
    pub name: String,
    /// リモートのURL
    pub url: String,
    /// fetch / push
    #[serde(rename = "type")]
    pub direction: RemoteDirection,
}

impl Remote {
    /// 新しいRemoteインスタンスを作成
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        direction: impl Into<RemoteDirection>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            direction: direction.into(),
        }
    }

    /// `git remote -v` の1行を解析する。形式に合わない行は `None`。
    pub fn parse_listing_line(line: &str) -> Option<Self> {
        let captures = LISTING_LINE_PATTERN.captures(line)?;
        Some(Self::new(&captures[1], &captures[2], &captures[3]))
    }

    /// fetch用のエントリかどうか
    pub fn is_fetch(&self) -> bool {
        self.direction == RemoteDirection::Fetch
    }

    /// push用のエントリかどうか
    pub fn is_push(&self) -> bool {
        self.direction == RemoteDirection::Push
    }
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} ({})", self.name, self.url, self.direction)
    }
}

/// `git remote -v` の出力全体を解析する
///
/// 形式に合わない行は読み飛ばし、出力順を保つ。
pub fn parse_remote_listing<I, S>(lines: I) -> Vec<Remote>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| Remote::parse_listing_line(line.as_ref()))
        .collect()
}

/// 出現順に重複を除いたリモート名
pub fn remote_names(remotes: &[Remote]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for remote in remotes {
        if !names.iter().any(|name| name == &remote.name) {
            names.push(remote.name.clone());
        }
    }
    names
}

/// 名前が一致するエントリのうち fetch を優先して返す
fn find_by_name<'a>(remotes: &'a [Remote], name: &str) -> Option<&'a Remote> {
    let mut matching = remotes.iter().filter(|remote| remote.name == name);
    let first = matching.clone().next()?;
    Some(matching.find(|remote| remote.is_fetch()).unwrap_or(first))
}

/// URLの元にするリモートを選ぶ
///
/// 名前が指定された場合はその名前のリモートのみを探す。指定がない場合は
/// `origin`、次に最初の fetch エントリ、最後に先頭のエントリを選ぶ。
pub fn select_remote<'a>(remotes: &'a [Remote], name: Option<&str>) -> Option<&'a Remote> {
    match name {
        Some(name) => find_by_name(remotes, name),
        None => find_by_name(remotes, DEFAULT_REMOTE)
            .or_else(|| remotes.iter().find(|remote| remote.is_fetch()))
            .or_else(|| remotes.first()),
    }
}
