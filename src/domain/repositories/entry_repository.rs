//! # Entry Repository Trait
//!
//! 作業ログの取得を抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::work_entry::WorkEntry;

/// 作業ログリポジトリ
///
/// 指定日の作業ログエントリの取得を担当するリポジトリ
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// 指定日のエントリを取得する
    ///
    /// # Arguments
    ///
    /// * `date` - レポート対象日
    ///
    /// # Returns
    ///
    /// 取得したエントリのリスト。該当なしは空リスト（エラーにしない）。
    ///
    /// # Errors
    ///
    /// ストアに到達できない場合に `PipelineError::Connection` を返す
    async fn fetch_entries(&self, date: NaiveDate) -> Result<Vec<WorkEntry>>;
}
