//! # Report Repository Trait
//!
//! レポートファイルの生成を抽象化

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::report::DailyReport;

/// レポートリポジトリ
///
/// テンプレートからのレポートファイル生成を担当するリポジトリ
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レポートをファイルに書き出す
    ///
    /// 生成されたファイルは同一実行内で再変更されない
    ///
    /// # Arguments
    ///
    /// * `report` - 書き出す日次レポート
    ///
    /// # Returns
    ///
    /// 新しく書き出したファイルのパス
    ///
    /// # Errors
    ///
    /// テンプレートが存在しない・読めない場合に `PipelineError::Template` を返す
    async fn render(&self, report: &DailyReport) -> Result<PathBuf>;
}
