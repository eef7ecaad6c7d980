//! # Summary Repository Trait
//!
//! テキスト要約を抽象化

use anyhow::Result;
use async_trait::async_trait;

/// 要約リポジトリ
///
/// 平文テキストの要約を担当するリポジトリ
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// テキストを要約する
    ///
    /// # Arguments
    ///
    /// * `text` - 要約対象の平文
    ///
    /// # Returns
    ///
    /// 要約された平文
    ///
    /// # Errors
    ///
    /// 非成功ステータス・タイムアウト・リトライ枯渇の場合に
    /// `PipelineError::RemoteService` を返す
    async fn summarize(&self, text: &str) -> Result<String>;
}
