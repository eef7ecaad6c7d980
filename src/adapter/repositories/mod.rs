//! Repository Implementations
//!
//! Domain層のRepository traitに対する外部システム実装
//!
//! - **mongo_entry_repository**: MongoDBからの作業ログ取得
//! - **hf_summary_repository**: Hugging Face Inference APIによる要約
//! - **xlsx_report_repository**: xlsxテンプレートへの書き込み
//! - **smtp_mail_repository**: lettreによるSMTP送信
//! - **csv_export**: 取得した生データのCSVエクスポート

pub mod csv_export;
pub mod hf_summary_repository;
pub mod mongo_entry_repository;
pub mod smtp_mail_repository;
pub mod xlsx_report_repository;
