//! # Fetch Entries Use Case
//!
//! 作業ログ取得ユースケース

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::domain::entities::work_entry::WorkEntry;
use crate::domain::repositories::entry_repository::EntryRepository;

/// 作業ログ取得ユースケース
///
/// 指定日のエントリをストアから取得する。該当なしはエラーではなく
/// 空リスト（レポートには明示マーカーが入る）。
pub struct FetchEntriesUseCase<R: EntryRepository + ?Sized> {
    entry_repository: Arc<R>,
}

impl<R: EntryRepository + ?Sized> FetchEntriesUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(entry_repository: Arc<R>) -> Self {
        Self { entry_repository }
    }

    /// エントリを取得する
    ///
    /// # Arguments
    ///
    /// * `date` - レポート対象日
    ///
    /// # Errors
    ///
    /// ストアに到達できない場合にエラーを返す
    pub async fn execute(&self, date: NaiveDate) -> Result<Vec<WorkEntry>> {
        let entries = self.entry_repository.fetch_entries(date).await?;
        info!("Fetched {} work entries for {}", entries.len(), date);
        Ok(entries)
    }
}
