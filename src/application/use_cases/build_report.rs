//! # Build Report Use Case
//!
//! レポートファイル生成ユースケース

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::domain::entities::report::DailyReport;
use crate::domain::repositories::report_repository::ReportRepository;

/// レポート生成ユースケース
///
/// テンプレートに要約を書き込んだ新しいレポートファイルを作る
pub struct BuildReportUseCase<R: ReportRepository + ?Sized> {
    report_repository: Arc<R>,
}

impl<R: ReportRepository + ?Sized> BuildReportUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(report_repository: Arc<R>) -> Self {
        Self { report_repository }
    }

    /// レポートを書き出す
    ///
    /// # Returns
    ///
    /// 新しく書き出したファイルのパス
    ///
    /// # Errors
    ///
    /// テンプレートが欠落・破損している場合にエラーを返す
    pub async fn execute(&self, report: &DailyReport) -> Result<PathBuf> {
        let path = self.report_repository.render(report).await?;
        info!("Report written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::report::TeamSummary;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct MockReportRepository {
        output: PathBuf,
        fail: bool,
    }

    #[async_trait]
    impl ReportRepository for MockReportRepository {
        async fn render(&self, _report: &DailyReport) -> Result<PathBuf> {
            if self.fail {
                anyhow::bail!("template missing");
            }
            Ok(self.output.clone())
        }
    }

    fn report() -> DailyReport {
        DailyReport::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            vec![TeamSummary::new(
                "Analytics".to_string(),
                vec!["shipped pipeline".to_string()],
            )],
        )
    }

    #[tokio::test]
    async fn test_build_report_returns_output_path() {
        let mock_repo = Arc::new(MockReportRepository {
            output: PathBuf::from("/tmp/Daily_Work_Report.xlsx"),
            fail: false,
        });
        let use_case = BuildReportUseCase::new(mock_repo);

        let path = use_case.execute(&report()).await.unwrap();

        assert_eq!(path, PathBuf::from("/tmp/Daily_Work_Report.xlsx"));
    }

    #[tokio::test]
    async fn test_build_report_propagates_template_errors() {
        let mock_repo = Arc::new(MockReportRepository {
            output: PathBuf::new(),
            fail: true,
        });
        let use_case = BuildReportUseCase::new(mock_repo);

        let result = use_case.execute(&report()).await;

        assert!(result.is_err());
    }
}
