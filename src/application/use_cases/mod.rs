//! # Use Cases
//!
//! パイプライン4ステージのビジネスフロー
//!
//! ## ユースケース
//!
//! - **FetchEntriesUseCase**: 当日分の作業ログ取得
//! - **SummarizeTeamsUseCase**: チーム単位の要約
//! - **BuildReportUseCase**: レポートファイル生成
//! - **SendReportUseCase**: レポートメール送信

pub mod build_report;
pub mod fetch_entries;
pub mod send_report;
pub mod summarize_teams;
