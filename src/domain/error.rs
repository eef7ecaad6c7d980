//! # Pipeline Errors
//!
//! パイプライン各ステージのエラー分類
//!
//! Adapter層は `anyhow::Result` を返すが、ステージ固有の失敗は
//! この型で包んでおくことで、Driver層やテストが `downcast_ref` で
//! 失敗クラスを判定できる。

use chrono::NaiveDate;
use thiserror::Error;

/// パイプラインのステージエラー
///
/// どのステージで失敗しても実行は打ち切り（部分レポートは送信しない）
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 作業ログストアに到達できない
    #[error("work-log store unreachable: {0}")]
    Connection(String),

    /// 指定日のエントリが存在しない（厳格な取得を要求した場合のみ）
    #[error("no work-log entries found for {0}")]
    EmptyResult(NaiveDate),

    /// 要約APIが失敗（非成功ステータス・タイムアウト・リトライ枯渇）
    #[error("summarization service failed: {0}")]
    RemoteService(String),

    /// レポートテンプレートが存在しない、または読めない
    #[error("report template missing or malformed: {0}")]
    Template(String),

    /// SMTP認証が拒否された
    #[error("SMTP authentication rejected: {0}")]
    Authentication(String),

    /// メール配送に失敗した
    #[error("report email delivery failed: {0}")]
    Delivery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_stage() {
        let err = PipelineError::Connection("connection refused".to_string());
        assert!(err.to_string().contains("unreachable"));

        let err = PipelineError::Template("no such file".to_string());
        assert!(err.to_string().contains("template"));

        let err = PipelineError::Authentication("535 bad credentials".to_string());
        assert!(err.to_string().contains("authentication"));
    }

    #[test]
    fn test_error_downcast_through_anyhow() {
        let err: anyhow::Error = PipelineError::Delivery("connection closed".to_string()).into();

        assert!(err.downcast_ref::<PipelineError>().is_some());
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Delivery(_))
        ));
    }

    #[test]
    fn test_empty_result_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let err = PipelineError::EmptyResult(date);
        assert!(err.to_string().contains("2025-01-15"));
    }
}
