use crate::common::error::BrowseError;

/// ghbrowse全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use ghbrowse::common::result::BrowseResult;
/// use ghbrowse::common::error::BrowseError;
///
/// fn example_function() -> BrowseResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> BrowseResult<()> {
///     Err(BrowseError::no_remotes("."))
/// }
/// ```
pub type BrowseResult<T> = Result<T, BrowseError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// エラーを遅延生成してBrowseResultに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use ghbrowse::common::result::{BrowseResult, OptionExt};
    /// use ghbrowse::common::error::BrowseError;
    ///
    /// let none_value: Option<String> = None;
    /// let result: BrowseResult<String> =
    ///     none_value.ok_or_browse_else(|| BrowseError::remote_not_found("origin", vec![]));
    /// assert!(result.is_err());
    /// ```
    fn ok_or_browse_else<F>(self, f: F) -> BrowseResult<T>
    where
        F: FnOnce() -> BrowseError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_browse_else<F>(self, f: F) -> BrowseResult<T>
    where
        F: FnOnce() -> BrowseError,
    {
        self.ok_or_else(f)
    }
}
