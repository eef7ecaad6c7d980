//! # Send Report Use Case
//!
//! レポートメール送信ユースケース
//!
//! メール本文（件名・HTMLテーブル・平文フォールバック）はここで
//! 組み立て、トランスポートの詳細はMailRepositoryに委ねる。

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::domain::entities::report::{DailyReport, ReportEmail};
use crate::domain::entities::work_entry::WorkEntry;
use crate::domain::repositories::mail_repository::MailRepository;
use crate::domain::services::grouping::GroupingService;

/// レポート送信ユースケース
pub struct SendReportUseCase<M: MailRepository + ?Sized> {
    mail_repository: Arc<M>,
}

impl<M: MailRepository + ?Sized> SendReportUseCase<M> {
    /// 新しいユースケースを作成
    pub fn new(mail_repository: Arc<M>) -> Self {
        Self { mail_repository }
    }

    /// レポートメールを組み立てて送信する
    ///
    /// # Arguments
    ///
    /// * `report` - 生成済みの日次レポート
    /// * `entries` - 報告統計の元になるエントリ
    /// * `attachment` - 添付するレポートファイルのパス
    ///
    /// # Errors
    ///
    /// 認証拒否・配送失敗の場合にエラーを返す（生成済みの
    /// レポートファイルは削除しない）
    pub async fn execute(
        &self,
        report: &DailyReport,
        entries: &[WorkEntry],
        attachment: &Path,
    ) -> Result<()> {
        let stats = GroupingService::reporting_stats(entries);
        let email = ReportEmail::compose(report.date, &stats, attachment);

        info!("Sending report email: {}", email.subject);
        self.mail_repository.send(&email).await?;
        info!("Report email sent");

        Ok(())
    }
}
