//! # Repository Traits
//!
//! パイプライン4ステージの抽象化（インターフェース定義のみ）
//!
//! - **entry_repository**: 作業ログの取得
//! - **summary_repository**: テキスト要約
//! - **report_repository**: レポートファイルの生成
//! - **mail_repository**: レポートメールの送信

pub mod entry_repository;
pub mod mail_repository;
pub mod report_repository;
pub mod summary_repository;
